use crate::bank::counter::{CounterStats, ServiceRecord};
use crate::bank::{Bank, Time};
use crate::config::{Count, SimulationConfig, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub per_counter_stats: Vec<CounterStats>,
    pub customer_count: Count,
    pub total_wait_time: Time,
    pub total_simulation_time: Time,
    pub average_wait_time: f64,
}

impl SimulationResult {
    /// Share of the whole run a counter spent serving, `0.0` for a run of zero length.
    pub fn utilization(&self, counter: usize) -> f64 {
        match self.per_counter_stats.get(counter) {
            Some(stats) if self.total_simulation_time > 0 => {
                stats.total_service_time as f64 / self.total_simulation_time as f64
            }
            _ => 0.0,
        }
    }

    pub fn served_count(&self) -> u64 {
        self.per_counter_stats
            .iter()
            .map(|stats| u64::from(stats.served_count))
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationTrace {
    pub result: SimulationResult,
    pub records: Vec<ServiceRecord>,
}

pub fn simulate_with_trace(config: &SimulationConfig) -> Result<SimulationTrace, ValidationError> {
    let mut bank = Bank::new(config)?;

    bank.admit_customers();
    let records = bank.drain();

    let total_wait_time = bank.total_wait_time();
    let result = SimulationResult {
        per_counter_stats: bank.counter_stats(),
        customer_count: config.customer_count,
        total_wait_time,
        total_simulation_time: bank.total_simulation_time(),
        average_wait_time: total_wait_time as f64 / f64::from(config.customer_count),
    };

    info!(
        counters = config.counter_count,
        customers = config.customer_count,
        total_wait_time = result.total_wait_time,
        total_simulation_time = result.total_simulation_time,
        "simulation finished"
    );

    Ok(SimulationTrace { result, records })
}

pub fn simulate(config: &SimulationConfig) -> Result<SimulationResult, ValidationError> {
    simulate_with_trace(config).map(|trace| trace.result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_counter_backlog() {
        let result = simulate(&SimulationConfig::new(1, 3, 5, 1)).unwrap();

        assert_eq!(result.total_wait_time, 9);
        assert_eq!(result.total_simulation_time, 15);
        assert!((result.average_wait_time - 3.0).abs() < 1e-9);
        assert!((result.utilization(0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_utilization_of_unknown_counter() {
        let result = simulate(&SimulationConfig::new(2, 1, 4, 1)).unwrap();

        assert!((result.utilization(0) - 1.0).abs() < 1e-9);
        assert_eq!(result.utilization(1), 0.0);
        assert_eq!(result.utilization(5), 0.0);
    }

    #[test]
    fn test_trace_matches_result() {
        let trace = simulate_with_trace(&SimulationConfig::new(3, 10, 4, 2)).unwrap();

        assert_eq!(trace.records.len(), 10);
        assert_eq!(
            trace.records.iter().map(|r| r.wait_time).sum::<Time>(),
            trace.result.total_wait_time
        );
        assert_eq!(
            trace.records.iter().map(|r| r.end_time).max(),
            Some(trace.result.total_simulation_time)
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = simulate(&SimulationConfig::new(0, 3, 5, 1)).unwrap_err();

        assert_eq!(err.field, crate::config::COUNTER_COUNT);
    }
}
