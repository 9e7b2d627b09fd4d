use crate::bank::counter::Counter;
use crate::bank::customer::{Customer, CustomerId};
use crate::bank::Time;
use crate::config::{Count, SimulationConfig, ValidationError};
use tracing::{debug, trace};

/// Simulated time between two arrival batches.
pub const ARRIVAL_INTERVAL: Time = 2;

/// Index of the counter with the fewest queued customers. On a tie the leftmost
/// counter wins. Expects at least one counter.
pub fn shortest_queue(counters: &[Counter]) -> usize {
    let mut min_index = 0;

    for (index, counter) in counters.iter().enumerate().skip(1) {
        if counter.queue_size() < counters[min_index].queue_size() {
            min_index = index;
        }
    }

    min_index
}

#[derive(Debug)]
pub struct CustomerDispatcher {
    customer_count: Count,
    service_time: Time,
    arrival_batch_size: Count,
    current_time: Time,
    dispatched: Count,
}

/// Only goal for CustomerDispatcher is to generate all customers of one run and put
/// each of them into the shortest queue at the moment of its arrival. Every
/// `arrival_batch_size` customers the clock moves by `ARRIVAL_INTERVAL`.
impl CustomerDispatcher {
    pub fn new(config: &SimulationConfig) -> Result<CustomerDispatcher, ValidationError> {
        config.validate()?;

        Ok(CustomerDispatcher {
            customer_count: config.customer_count,
            service_time: Time::from(config.service_time),
            arrival_batch_size: config.arrival_batch_size,
            current_time: 0,
            dispatched: 0,
        })
    }

    pub fn current_time(&self) -> Time {
        self.current_time
    }

    pub fn dispatched(&self) -> Count {
        self.dispatched
    }

    fn next_customer(&mut self) -> Option<Customer> {
        if self.dispatched == self.customer_count {
            return None;
        }

        let id: CustomerId = self.dispatched + 1;
        let customer = Customer::new(id, self.current_time, self.service_time);

        self.dispatched += 1;

        if self.dispatched % self.arrival_batch_size == 0 {
            self.current_time += ARRIVAL_INTERVAL;
        }

        Some(customer)
    }

    /// Assigns every remaining customer. Queue lengths only, service timing is not
    /// taken into account. Without counters nothing is dispatched.
    pub fn dispatch(&mut self, counters: &mut [Counter]) {
        if counters.is_empty() {
            return;
        }

        while let Some(customer) = self.next_customer() {
            let index = shortest_queue(counters);

            trace!(
                customer = customer.id,
                arrival_time = customer.arrival_time,
                counter = index,
                "customer assigned"
            );

            counters[index].add_customer(customer);
        }

        debug!(
            customers = self.dispatched,
            last_arrival_batch_time = self.current_time,
            "all customers dispatched"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counters(n: usize) -> Vec<Counter> {
        (0..n).map(Counter::new).collect()
    }

    #[test]
    fn test_shortest_queue_prefers_leftmost() {
        let mut counters = counters(3);
        assert_eq!(shortest_queue(&counters), 0);

        counters[0].add_customer(Customer::new(1, 0, 1));
        assert_eq!(shortest_queue(&counters), 1);

        counters[1].add_customer(Customer::new(2, 0, 1));
        counters[2].add_customer(Customer::new(3, 0, 1));
        assert_eq!(shortest_queue(&counters), 0);

        counters[0].add_customer(Customer::new(4, 0, 1));
        assert_eq!(shortest_queue(&counters), 1);
    }

    #[test]
    fn test_arrival_time_advances_per_batch() {
        let mut counters = counters(1);
        let mut dispatcher = CustomerDispatcher::new(&SimulationConfig::new(1, 7, 3, 3)).unwrap();

        dispatcher.dispatch(&mut counters);

        let mut arrivals = Vec::new();
        while let Some(record) = counters[0].serve_next() {
            arrivals.push(record.arrival_time);
        }

        assert_eq!(arrivals, vec![0, 0, 0, 2, 2, 2, 4]);
        assert_eq!(dispatcher.dispatched(), 7);
        assert_eq!(dispatcher.current_time(), 4);
    }

    #[test]
    fn test_same_tick_customers_spread_over_counters() {
        let mut counters = counters(3);
        let mut dispatcher = CustomerDispatcher::new(&SimulationConfig::new(3, 7, 5, 10)).unwrap();

        dispatcher.dispatch(&mut counters);

        let sizes: Vec<usize> = counters.iter().map(Counter::queue_size).collect();
        assert_eq!(sizes, vec![3, 2, 2]);
    }

    #[test]
    fn test_customers_are_numbered_in_arrival_order() {
        let mut counters = counters(2);
        let mut dispatcher = CustomerDispatcher::new(&SimulationConfig::new(2, 4, 1, 1)).unwrap();

        dispatcher.dispatch(&mut counters);

        let ids: Vec<CustomerId> = std::iter::from_fn(|| counters[1].serve_next())
            .map(|record| record.customer_id)
            .collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_dispatcher_rejects_zero_batch_size() {
        let err = CustomerDispatcher::new(&SimulationConfig::new(1, 2, 1, 0)).unwrap_err();

        assert_eq!(err.field, crate::config::ARRIVAL_BATCH_SIZE);
        assert_eq!(err.reason, crate::config::Reason::NotPositive);
    }

    #[test]
    fn test_empty_counter_slice_leaves_customers_undispatched() {
        let mut dispatcher = CustomerDispatcher::new(&SimulationConfig::new(1, 4, 1, 1)).unwrap();

        dispatcher.dispatch(&mut []);
        assert_eq!(dispatcher.dispatched(), 0);

        let mut counters = counters(1);
        dispatcher.dispatch(&mut counters);
        assert_eq!(dispatcher.dispatched(), 4);
        assert_eq!(counters[0].queue_size(), 4);
    }
}
