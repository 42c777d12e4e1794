//! Error types for statmon.
//!
//! - [`ParseError`]: the fetched report is malformed or has a non-positive total
//! - [`FetchError`]: the report could not be fetched
//! - [`CycleError`]: what a single poll cycle reports when it does not
//!   finish with a fully evaluated report
//!
//! | Error | Counts toward fetch-failure streak |
//! |-------|------------------------------------|
//! | FetchError | Yes |
//! | ParseError | No |

mod cycle;
mod fetch;
mod parse;

pub use cycle::CycleError;
pub use fetch::FetchError;
pub use parse::ParseError;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::report::{Alert, ReportField};
    use crate::traits::HttpError;

    #[test]
    fn test_cycle_error_codes_delegate() {
        let fetch = CycleError::Fetch {
            source: FetchError::Http(HttpError::Timeout("5s".to_string())),
            streak: 1,
            diagnostic: false,
        };
        assert_eq!(fetch.error_code(), "E_FETCH_TIMEOUT");

        let parse = CycleError::Parse {
            source: ParseError::WrongFieldCount { found: 3 },
            alerts: Vec::new(),
        };
        assert_eq!(parse.error_code(), "E_REPORT_FIELD_COUNT");
    }

    #[test]
    fn test_cycle_error_alerts() {
        let parse = CycleError::Parse {
            source: ParseError::InvalidTotal {
                field: ReportField::TotalMemory,
                value: 0,
            },
            alerts: vec![Alert::HighLoad { load: 40.0 }],
        };
        assert_eq!(parse.alerts(), &[Alert::HighLoad { load: 40.0 }]);

        let fetch = CycleError::Fetch {
            source: FetchError::Status { status: 500 },
            streak: 3,
            diagnostic: true,
        };
        assert!(fetch.alerts().is_empty());
    }

    #[test]
    fn test_cycle_error_display() {
        let fetch = CycleError::Fetch {
            source: FetchError::Status { status: 404 },
            streak: 2,
            diagnostic: false,
        };
        assert_eq!(fetch.to_string(), "fetch failed (2 in a row): bad status: 404");
    }
}
