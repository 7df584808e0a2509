//! Construction-time errors.
//!
//! Interaction never fails: out-of-range input is rejected and logged, not
//! returned. Only building a widget whose geometry cannot work is an error.

/// A widget could not be built with the requested geometry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WidgetError {
    #[error("a slider needs at least two ticks, got {count}")]
    TooFewTicks { count: usize },

    #[error("track of height {height} cannot hold its controls, needs at least {required}")]
    TrackTooShort { height: f64, required: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_numbers() {
        let err = WidgetError::TooFewTicks { count: 1 };
        assert_eq!(err.to_string(), "a slider needs at least two ticks, got 1");

        let err = WidgetError::TrackTooShort {
            height: 12.0,
            required: 22.0,
        };
        assert_eq!(
            err.to_string(),
            "track of height 12 cannot hold its controls, needs at least 22"
        );
    }
}
