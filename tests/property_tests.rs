//! Property-based tests for leveled_logger using proptest

use leveled_logger::core::{archive_path, rotation_stamp};
use leveled_logger::prelude::*;
use proptest::prelude::*;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

#[derive(Clone, Default)]
struct Capture(Arc<parking_lot::Mutex<Vec<u8>>>);

impl Capture {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().clone()).unwrap()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn captured(threshold: LogLevel) -> (Logger, Capture) {
    let capture = Capture::default();
    let logger = Logger::builder()
        .min_level(threshold)
        .console(ConsoleAppender::with_writer(capture.clone()))
        .build()
        .unwrap();
    (logger, capture)
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);

        let upper: LogLevel = level.to_str().to_uppercase().parse().unwrap();
        prop_assert_eq!(level, upper);
    }

    /// Ordering follows the numeric severity
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
        prop_assert_eq!(level1.is_enabled_for(level2), val1 >= val2);
    }

    #[test]
    fn test_prefix_wraps_uppercase_name(level in any_level()) {
        let expected = format!("[{}]", level.to_str().to_uppercase());
        prop_assert_eq!(level.prefix(), expected.as_str());
    }

    #[test]
    fn test_unknown_level_names_rejected(name in "[a-z]{1,10}") {
        let known = ["debug", "info", "warn", "warning", "error", "fatal"];
        prop_assume!(!known.contains(&name.as_str()));
        prop_assert!(name.parse::<LogLevel>().is_err());
    }
}

// ============================================================================
// Filtering Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A call at severity S is written iff S >= threshold
    #[test]
    fn test_emitted_iff_at_or_above_threshold(
        threshold in any_level(),
        severity in any_level(),
    ) {
        let (logger, capture) = captured(threshold);
        logger.log_at(severity, None, "probe");

        let text = capture.text();
        if severity >= threshold {
            prop_assert_eq!(text.lines().count(), 1);
            let expected_prefix = format!("{} ", severity.prefix());
            prop_assert!(text.starts_with(&expected_prefix));
        } else {
            prop_assert!(text.is_empty());
            prop_assert_eq!(logger.metrics().filtered(), 1);
        }
    }

    /// Whatever the message, one call produces exactly one line
    #[test]
    fn test_any_message_is_one_line(message in any::<String>()) {
        let (logger, capture) = captured(LogLevel::Debug);
        logger.info(&message);

        let text = capture.text();
        prop_assert!(text.ends_with('\n'));
        prop_assert_eq!(text.matches('\n').count(), 1);
        prop_assert!(!text.contains('\r'));
    }

    /// Messages without control characters are written verbatim
    #[test]
    fn test_plain_message_preserved(message in "[a-zA-Z0-9 .,:;!?-]{0,80}") {
        let (logger, capture) = captured(LogLevel::Debug);
        logger.log_at(LogLevel::Warn, None, &message);

        let text = capture.text();
        let line = text.trim_end_matches('\n');
        prop_assert!(line.ends_with(message.as_str()));
    }
}

// ============================================================================
// Archive Naming Tests
// ============================================================================

proptest! {
    #[test]
    fn test_archive_keeps_directory_and_extension(
        stem in "[a-z][a-z0-9_]{0,15}",
        ext in "[a-z]{1,4}",
        stamp in "[0-9]{8}-[0-9]{6}",
    ) {
        let original = Path::new("logs").join(format!("{}.{}", stem, ext));
        let archive = archive_path(&original, &stamp);

        prop_assert_eq!(archive.parent(), original.parent());
        prop_assert_eq!(archive.extension(), original.extension());
        let expected = format!("{}-{}.{}", stem, stamp, ext);
        prop_assert_eq!(archive.file_name().unwrap().to_str().unwrap(), expected.as_str());
    }

    #[test]
    fn test_rotation_stamp_layout(secs in 0i64..4_102_444_800) {
        use chrono::TimeZone;
        let datetime = chrono::Local.timestamp_opt(secs, 0).unwrap();
        let stamp = rotation_stamp(&datetime);

        prop_assert_eq!(stamp.len(), 15);
        prop_assert_eq!(&stamp[8..9], "-");
        prop_assert!(stamp
            .chars()
            .enumerate()
            .all(|(i, c)| i == 8 || c.is_ascii_digit()));
    }
}
