use failure::{Error, Fail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::path::Path;

/// Number of customers, counters and similar counts.
pub type Count = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    NotANumber,
    NotPositive,
    TooLarge,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Reason::NotANumber => write!(f, "must be a number"),
            Reason::NotPositive => write!(f, "must be positive"),
            Reason::TooLarge => write!(f, "must be at most {}", Count::MAX),
        }
    }
}

#[derive(Debug, Fail, Clone, PartialEq, Eq)]
#[fail(display = "validation failed because of \"{} {}\"", field, reason)]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: Reason,
}

impl ValidationError {
    fn new(field: &'static str, reason: Reason) -> ValidationError {
        ValidationError { field, reason }
    }
}

pub const COUNTER_COUNT: &str = "number of service counters";
pub const CUSTOMER_COUNT: &str = "number of customers";
pub const SERVICE_TIME: &str = "service time";
pub const ARRIVAL_BATCH_SIZE: &str = "arrival rate";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub counter_count: Count,
    pub customer_count: Count,
    pub service_time: Count, // Time every customer spends at the counter
    pub arrival_batch_size: Count, // Customers arriving before time advances by 2 units
}

impl SimulationConfig {
    pub fn new(
        counter_count: Count,
        customer_count: Count,
        service_time: Count,
        arrival_batch_size: Count,
    ) -> SimulationConfig {
        SimulationConfig {
            counter_count,
            customer_count,
            service_time,
            arrival_batch_size,
        }
    }

    fn fields(&self) -> [(&'static str, Count); 4] {
        [
            (COUNTER_COUNT, self.counter_count),
            (CUSTOMER_COUNT, self.customer_count),
            (SERVICE_TIME, self.service_time),
            (ARRIVAL_BATCH_SIZE, self.arrival_batch_size),
        ]
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for &(field, value) in self.fields().iter() {
            if value == 0 {
                return Err(ValidationError::new(field, Reason::NotPositive));
            }
        }

        Ok(())
    }
}

/// Parses one raw input value, e.g. a line typed by the user.
pub fn parse_field(field: &'static str, raw: &str) -> Result<Count, ValidationError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::new(field, Reason::NotANumber))?;

    if value <= 0 {
        return Err(ValidationError::new(field, Reason::NotPositive));
    }

    if value > Count::MAX as i64 {
        return Err(ValidationError::new(field, Reason::TooLarge));
    }

    Ok(value as Count)
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SimulationConfig, Error> {
    let file = File::open(path.as_ref())?;

    let config: SimulationConfig = serde_json::from_reader(file)?;

    config.validate()?;

    Ok(config)
}
