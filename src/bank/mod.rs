use crate::bank::counter::{Counter, CounterStats, ServiceRecord};
use crate::bank::dispatcher::CustomerDispatcher;
use crate::config::{SimulationConfig, ValidationError};
use tracing::{debug, trace};

pub mod counter;
pub mod customer;
pub mod dispatcher;

pub type Time = u64;

/// `Bank` owns the counters of one simulation run. A run is two passes: every
/// customer is dispatched to a queue first, then each counter drains its queue
/// in index order.
#[derive(Debug)]
pub struct Bank {
    pub counters: Vec<Counter>,
    dispatcher: CustomerDispatcher,
    total_wait_time: Time,
}

impl Bank {
    pub fn new(config: &SimulationConfig) -> Result<Bank, ValidationError> {
        let dispatcher = CustomerDispatcher::new(config)?;

        Ok(Bank {
            counters: (0..config.counter_count as usize).map(Counter::new).collect(),
            dispatcher,
            total_wait_time: 0,
        })
    }

    pub fn admit_customers(&mut self) {
        self.dispatcher.dispatch(&mut self.counters);
    }

    /// Serves everybody still queued and returns the service records in counter
    /// order, then service order.
    pub fn drain(&mut self) -> Vec<ServiceRecord> {
        let mut records = Vec::new();

        for counter in self.counters.iter_mut() {
            while let Some(record) = counter.serve_next() {
                trace!(
                    customer = record.customer_id,
                    counter = record.counter,
                    start_time = record.start_time,
                    wait_time = record.wait_time,
                    "customer served"
                );

                self.total_wait_time += record.wait_time;
                records.push(record);
            }

            debug!(
                counter = counter.index(),
                served = counter.served_count(),
                end_time = counter.end_time(),
                "counter drained"
            );
        }

        records
    }

    pub fn total_wait_time(&self) -> Time {
        self.total_wait_time
    }

    pub fn total_simulation_time(&self) -> Time {
        self.counters
            .iter()
            .map(Counter::end_time)
            .max()
            .unwrap_or(0)
    }

    pub fn counter_stats(&self) -> Vec<CounterStats> {
        self.counters.iter().map(Counter::stats).collect()
    }
}
