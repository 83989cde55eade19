//! Integration tests for the launch pipeline
//!
//! These tests drive the launcher end to end with scripted collaborators,
//! covering each documented outcome and the reporting channel it uses.

use mclaunch_core::diagnostics::{Diagnostic, RecordingSink};
use mclaunch_core::dispatch::{ScriptedDispatcher, ShowMode};
use mclaunch_core::encoding::{Reply, ScriptedConverter};
use mclaunch_core::{
    Config, EncodingError, Error, InvocationError, LaunchOptions, LaunchStatus, Launcher,
    SourceText,
};

fn launcher(
    converter: ScriptedConverter,
    dispatcher: ScriptedDispatcher,
) -> Launcher<ScriptedConverter, ScriptedDispatcher> {
    Launcher::new(converter, dispatcher, LaunchOptions::default())
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_default_uri_dispatched_with_open() {
        let launcher = launcher(ScriptedConverter::new(), ScriptedDispatcher::replying(42));
        let sink = RecordingSink::new();

        let status = launcher.run(SourceText::DEFAULT, &sink);
        assert_eq!(status, LaunchStatus::Success);

        // Size query asks for 27 characters plus the terminator
        let calls = launcher.converter().calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].is_size_query());
        assert_eq!(calls[1].capacity, 28);

        let requests = launcher.dispatcher().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].verb, "open");
        assert_eq!(requests[0].show_mode, ShowMode::Normal);
        assert_eq!(requests[0].uri.len(), 27);
        assert_eq!(requests[0].uri_lossy(), "minecraft://openServersTab/");
        assert_ne!(requests[0].uri.last(), Some(&0));
    }

    #[test]
    fn test_size_query_failure_reports_narrow() {
        let launcher = launcher(
            ScriptedConverter::new().size_query(Reply::Fail(1113)),
            ScriptedDispatcher::new(),
        );
        let sink = RecordingSink::new();

        let status = launcher.run(SourceText::DEFAULT, &sink);
        assert_eq!(status, LaunchStatus::Failure);
        assert_eq!(status.exit_code(), 1);

        assert_eq!(
            sink.lines(),
            vec![Diagnostic::Narrow(
                "Error: Failed to get buffer size for wide string conversion. Error code: 1113"
                    .to_string()
            )]
        );
        assert_eq!(launcher.converter().convert_count(), 0);
        assert_eq!(launcher.dispatcher().call_count(), 0);
    }

    #[test]
    fn test_conversion_failure_reports_narrow() {
        let launcher = launcher(
            ScriptedConverter::new().convert(Reply::Fail(122)),
            ScriptedDispatcher::new(),
        );
        let sink = RecordingSink::new();

        let status = launcher.run(SourceText::DEFAULT, &sink);
        assert_eq!(status, LaunchStatus::Failure);

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(!lines[0].is_wide());
        assert_eq!(
            lines[0].text(),
            "Error: Failed to convert URI to wide string. Error code: 122"
        );
        assert_eq!(launcher.dispatcher().call_count(), 0);
    }

    #[test]
    fn test_file_not_found_reports_wide_with_guidance() {
        let launcher = launcher(ScriptedConverter::new(), ScriptedDispatcher::replying(2));
        let sink = RecordingSink::new();

        let status = launcher.run(SourceText::DEFAULT, &sink);
        assert_eq!(status, LaunchStatus::Failure);
        assert_eq!(status.exit_code(), 1);

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(Diagnostic::is_wide));
        assert_eq!(lines[0].text(), "Error: Failed to open URI. Error code: 2");
        assert_eq!(
            lines[1].text(),
            "Please ensure the Minecraft Launcher is installed and the URI scheme 'minecraft://' is correctly associated."
        );
    }

    #[test]
    fn test_success_prints_nothing() {
        let launcher = launcher(ScriptedConverter::new(), ScriptedDispatcher::replying(42));
        let sink = RecordingSink::new();

        let status = launcher.run(SourceText::DEFAULT, &sink);
        assert_eq!(status.exit_code(), 0);
        assert!(sink.is_empty());
    }
}

mod classification_tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        for raw in -5..=100isize {
            let launcher = launcher(ScriptedConverter::new(), ScriptedDispatcher::replying(raw));
            let result = launcher.launch(SourceText::DEFAULT);
            if raw > 32 {
                assert!(result.is_ok(), "raw {} should succeed", raw);
            } else {
                assert!(
                    matches!(
                        result,
                        Err(Error::Invocation(InvocationError::DispatchFailed(code))) if code == raw
                    ),
                    "raw {} should fail",
                    raw
                );
            }
        }
    }
}

mod encoding_tests {
    use super::*;

    #[test]
    fn test_reported_size_is_used_as_capacity() {
        let launcher = launcher(ScriptedConverter::new(), ScriptedDispatcher::new());
        launcher
            .launch(SourceText::new(c"minecraft://\xc3\xa9"))
            .unwrap();

        let calls = launcher.converter().calls();
        // 12 ASCII characters, one two-byte character, one terminator
        assert_eq!(calls[1].capacity, 14);
        assert_eq!(launcher.dispatcher().requests()[0].uri.len(), 13);
    }

    #[test]
    fn test_empty_source_dispatches_empty_text() {
        let launcher = launcher(ScriptedConverter::new(), ScriptedDispatcher::new());
        launcher.launch(SourceText::new(c"")).unwrap();

        let calls = launcher.converter().calls();
        assert_eq!(calls[1].capacity, 1);
        assert!(launcher.dispatcher().requests()[0].uri.is_empty());
    }

    #[test]
    fn test_encoding_error_keeps_code() {
        let launcher = launcher(
            ScriptedConverter::new().size_query(Reply::Fail(87)),
            ScriptedDispatcher::new(),
        );
        let err = launcher.launch(SourceText::DEFAULT).unwrap_err();
        assert!(matches!(
            err,
            Error::Encoding(EncodingError::SizeQueryFailed(87))
        ));
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_config_drives_dispatch() {
        let config = Config::parse(
            r#"
uri = "steam://open/games"
verb = "explore"
show_mode = "minimized"
handler_name = "Steam client"
"#,
        )
        .unwrap();
        let source = config.source_text().unwrap();
        let launcher = Launcher::new(
            ScriptedConverter::new(),
            ScriptedDispatcher::replying(31),
            config.launch_options(),
        );
        let sink = RecordingSink::new();

        let status = launcher.run(SourceText::new(&source), &sink);
        assert_eq!(status, LaunchStatus::Failure);

        let requests = launcher.dispatcher().requests();
        assert_eq!(requests[0].verb, "explore");
        assert_eq!(requests[0].show_mode, ShowMode::Minimized);
        assert_eq!(requests[0].uri_lossy(), "steam://open/games");

        let lines = sink.lines();
        assert_eq!(
            lines[1].text(),
            "Please ensure the Steam client is installed and the URI scheme 'steam://' is correctly associated."
        );
    }
}
