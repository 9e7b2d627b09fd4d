use crate::bank::customer::{Customer, CustomerId};
use crate::bank::Time;
use serde::{Deserialize, Serialize};
use std::cmp::max;
use std::collections::vec_deque::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub customer_id: CustomerId,
    pub counter: usize,
    pub arrival_time: Time,
    pub start_time: Time,
    pub end_time: Time,
    pub wait_time: Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterStats {
    pub served_count: u32,
    pub total_service_time: Time,
    pub end_time: Time,
}

/// 1. `Counter` is a single teller serving its own queue in arrival order
///     * `add_customer` puts the customer at the end of the queue
///     * `serve_customer` when
///         * queue is empty
///             1) nothing changes, wait time `0` is returned
///         * otherwise
///             1) pop the head of the queue
///             2) service starts at `max(end_time, arrival_time)`
///             3) wait time is `start - arrival_time`
///             4) `end_time` moves to `start + service_time`
///             5) served count and total service time grow
///
/// `end_time` never decreases between serve calls.
#[derive(Debug, Default)]
pub struct Counter {
    index: usize,
    queue: VecDeque<Customer>,
    end_time: Time,
    served_count: u32,
    total_service_time: Time,
}

impl Counter {
    pub fn new(index: usize) -> Counter {
        Counter {
            index,
            ..Counter::default()
        }
    }

    pub fn add_customer(&mut self, customer: Customer) {
        self.queue.push_back(customer);
    }

    /// Serves the head of the queue and returns how long the customer waited.
    /// An empty queue is a no-op returning `0`, check `is_idle` first.
    pub fn serve_customer(&mut self) -> Time {
        self.serve_next().map_or(0, |record| record.wait_time)
    }

    pub fn serve_next(&mut self) -> Option<ServiceRecord> {
        let customer = self.queue.pop_front()?;

        let start_time = max(self.end_time, customer.arrival_time);
        let wait_time = start_time - customer.arrival_time;

        self.end_time = start_time + customer.service_time;
        self.total_service_time += customer.service_time;
        self.served_count += 1;

        Some(ServiceRecord {
            customer_id: customer.id,
            counter: self.index,
            arrival_time: customer.arrival_time,
            start_time,
            end_time: self.end_time,
            wait_time,
        })
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn end_time(&self) -> Time {
        self.end_time
    }

    pub fn queue_size(&self) -> usize {
        self.queue.len()
    }

    pub fn served_count(&self) -> u32 {
        self.served_count
    }

    pub fn total_service_time(&self) -> Time {
        self.total_service_time
    }

    pub fn stats(&self) -> CounterStats {
        CounterStats {
            served_count: self.served_count,
            total_service_time: self.total_service_time,
            end_time: self.end_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serving_empty_counter_changes_nothing() {
        let mut counter = Counter::new(0);

        assert!(counter.is_idle());
        assert_eq!(counter.serve_customer(), 0);
        assert_eq!(counter.serve_next(), None);
        assert_eq!(counter.end_time(), 0);
        assert_eq!(counter.served_count(), 0);
        assert_eq!(counter.total_service_time(), 0);
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut counter = Counter::new(3);
        counter.add_customer(Customer::new(1, 0, 5));
        counter.add_customer(Customer::new(2, 0, 5));
        assert_eq!(counter.queue_size(), 2);

        let first = counter.serve_next().unwrap();
        let second = counter.serve_next().unwrap();

        assert_eq!(first.customer_id, 1);
        assert_eq!(second.customer_id, 2);
        assert_eq!(first.counter, 3);
        assert!(counter.is_idle());
    }

    #[test]
    fn test_customer_waits_for_busy_counter() {
        let mut counter = Counter::new(0);
        counter.add_customer(Customer::new(1, 0, 5));
        counter.add_customer(Customer::new(2, 2, 5));
        counter.add_customer(Customer::new(3, 4, 5));

        assert_eq!(counter.serve_customer(), 0);
        assert_eq!(counter.end_time(), 5);
        assert_eq!(counter.serve_customer(), 3);
        assert_eq!(counter.end_time(), 10);
        assert_eq!(counter.serve_customer(), 6);
        assert_eq!(counter.end_time(), 15);

        assert_eq!(
            counter.stats(),
            CounterStats {
                served_count: 3,
                total_service_time: 15,
                end_time: 15,
            }
        );
    }

    #[test]
    fn test_idle_gap_before_late_arrival() {
        let mut counter = Counter::new(0);
        counter.add_customer(Customer::new(1, 0, 2));
        counter.add_customer(Customer::new(2, 10, 3));

        counter.serve_customer();
        let record = counter.serve_next().unwrap();

        assert_eq!(record.wait_time, 0);
        assert_eq!(record.start_time, 10);
        assert_eq!(record.end_time, 13);
        assert_eq!(counter.total_service_time(), 5);
    }
}
