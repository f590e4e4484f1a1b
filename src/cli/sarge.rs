use std::convert::Infallible;
use std::num::ParseIntError;

use sarge::ArgumentType;

use crate::cli::{Count, InputFiles};

impl ArgumentType for InputFiles {
    type Error = Infallible;

    const REPEATABLE: bool = true;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        let files = val
            .into_iter()
            .flat_map(|v| v.split(','))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Some(Ok(InputFiles(files)))
    }

    fn default_value() -> Option<Self> {
        Some(InputFiles::default())
    }
}

impl ArgumentType for Count {
    type Error = ParseIntError;

    const REPEATABLE: bool = false;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        // A flag given without a value fails like an empty number.
        Some(val.unwrap_or_default().trim().parse().map(Count))
    }

    fn default_value() -> Option<Self> {
        None
    }
}
