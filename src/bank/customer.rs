use crate::bank::Time;

pub type CustomerId = u32;

/// Customer waiting in a counter's queue. Created by the dispatcher on arrival and
/// consumed by the counter which serves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
    pub arrival_time: Time,
    pub service_time: Time,
}

impl Customer {
    pub fn new(id: CustomerId, arrival_time: Time, service_time: Time) -> Customer {
        Customer {
            id,
            arrival_time,
            service_time,
        }
    }
}
