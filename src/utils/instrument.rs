// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Call instrumentation.
//!
//! [`logged!`](crate::logged) and [`try_logged!`](crate::try_logged) wrap the
//! body of a function or method and emit two `debug!` records: one with the
//! qualified name and the received arguments before the body runs, one with
//! the returned value and the elapsed time once it has returned.
//!
//! Records carry the default `tracing` target, i.e. the module path of the code
//! invoking the macro, so filtering can be scoped per module:
//!
//! ```text
//! RUST_LOG=info,als_core::model::store=debug
//! ```
//!
//! Failures are never intercepted. A panic unwinds through the macro and an
//! `Err` leaves [`try_logged!`](crate::try_logged) untouched; in both cases no
//! "returned" record is written.
//!
//! ```
//! fn add(a: i32, b: i32) -> i32 {
//!     als_core::logged!("add", (a, b), a + b)
//! }
//!
//! assert_eq!(add(2, 3), 5);
//! ```

/// Instruments an infallible body. See the [module docs](crate::utils::instrument).
#[macro_export]
macro_rules! logged {
    ($name:expr, $args:expr, $body:expr $(,)?) => {{
        let __als_name: &str = $name;
        $crate::__private::tracing::debug!("{}() called with : {:?}", __als_name, $args);
        let __als_start = ::std::time::Instant::now();
        let __als_result = $body;
        let __als_elapsed = $crate::utils::Elapsed::from_duration(__als_start.elapsed());
        $crate::__private::tracing::debug!(
            "{}() returned {:?} in {} ms",
            __als_name,
            __als_result,
            __als_elapsed
        );
        __als_result
    }};
}

/// Instruments a body producing a `Result`. Only `Ok` values are logged as returned.
#[macro_export]
macro_rules! try_logged {
    ($name:expr, $args:expr, $body:expr $(,)?) => {{
        let __als_name: &str = $name;
        $crate::__private::tracing::debug!("{}() called with : {:?}", __als_name, $args);
        let __als_start = ::std::time::Instant::now();
        let __als_result = $body;
        if let ::std::result::Result::Ok(__als_value) = &__als_result {
            let __als_elapsed = $crate::utils::Elapsed::from_duration(__als_start.elapsed());
            $crate::__private::tracing::debug!(
                "{}() returned {:?} in {} ms",
                __als_name,
                __als_value,
                __als_elapsed
            );
        }
        __als_result
    }};
}

#[cfg(test)]
mod tests {
    use crate::errors::{AlsError, ErrorDetails};
    use crate::observability::test_support::capture_logs;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn multiply(a: i32, b: i32) -> i32 {
        crate::logged!("tests::multiply", (a, b), a * b)
    }

    fn checked_shape(shape: Vec<usize>) -> Result<usize, AlsError> {
        crate::try_logged!("tests::checked_shape", (&shape,), {
            if shape.len() < 2 {
                Err(AlsError::new(
                    "not an image",
                    ErrorDetails::InvalidImageShape {
                        shape: shape.clone(),
                    },
                ))
            } else {
                Ok(shape.len())
            }
        })
    }

    #[test]
    fn test_logged_returns_body_value_and_logs_both_records() {
        let (value, logs) = capture_logs(|| multiply(6, 7));

        assert_eq!(value, 42);
        assert!(logs.contains("tests::multiply() called with : (6, 7)"));
        assert!(logs.contains("tests::multiply() returned 42 in "));
        assert!(logs.contains(" ms"));
    }

    #[test]
    fn test_logged_uses_declaring_module_as_target() {
        let (_, logs) = capture_logs(|| multiply(1, 1));
        assert!(logs.contains("als_core::utils::instrument::tests"));
    }

    #[test]
    fn test_try_logged_logs_ok_value() {
        let (value, logs) = capture_logs(|| checked_shape(vec![4, 6, 3]));

        assert_eq!(value.unwrap(), 3);
        assert!(logs.contains("tests::checked_shape() called with : ([4, 6, 3],)"));
        assert!(logs.contains("tests::checked_shape() returned 3 in "));
    }

    #[test]
    fn test_try_logged_passes_error_through_without_returned_record() {
        let (value, logs) = capture_logs(|| checked_shape(vec![12]));

        let error = value.unwrap_err();
        assert_eq!(error.message(), "not an image");
        assert_eq!(
            error.details(),
            &ErrorDetails::InvalidImageShape { shape: vec![12] }
        );
        assert!(logs.contains("tests::checked_shape() called with"));
        assert!(!logs.contains("returned"));
    }

    #[test]
    fn test_logged_does_not_swallow_panics() {
        fn explode(reason: &str) -> u8 {
            crate::logged!("tests::explode", (reason,), {
                if reason.is_empty() {
                    0
                } else {
                    panic!("{}", reason)
                }
            })
        }

        let (outcome, logs) =
            capture_logs(|| catch_unwind(AssertUnwindSafe(|| explode("observer failure"))));

        let payload = outcome.unwrap_err();
        assert_eq!(
            payload.downcast_ref::<String>().map(String::as_str),
            Some("observer failure")
        );
        assert!(logs.contains("tests::explode() called with"));
        assert!(!logs.contains("returned"));
    }
}
