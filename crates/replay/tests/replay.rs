//! Replays a trace file end to end.

use keyfold_replay::{Trace, TraceError, render_text, replay};
use pretty_assertions::assert_eq;

const TRACE: &str = r#"
[consumer]
not-handled = ["f12"]
reject = ["ctrl-r"]

[[signal]]
kind = "key-down"
key = "escape"

[[signal]]
kind = "key-down"
key = "oem-222"
dead = true

[[signal]]
kind = "text"
text = "é"

[[signal]]
kind = "key-down"
key = "d2"
modifiers = ["ctrl", "alt"]

[[signal]]
kind = "text"
text = "@"
modifiers = ["ctrl", "alt"]

[[signal]]
kind = "key-down"
key = "f12"

[[signal]]
kind = "text"
text = "r"
modifiers = ["ctrl"]

[[signal]]
kind = "text"
text = "``"
"#;

#[test]
fn replays_trace_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("trace.toml");
	std::fs::write(&path, TRACE).unwrap();

	let trace = Trace::load(&path).unwrap();
	let records = replay(&trace);

	assert_eq!(
		render_text(&records),
		concat!(
			"#1 key-down escape -> handled [esc]\n",
			"#2 key-down oem-222 (dead) -> unhandled\n",
			"#3 text \"é\" -> handled [é]\n",
			"#4 key-down ctrl-alt-d2 -> unhandled\n",
			"#5 text \"@\" (ctrl-alt) -> handled [ctrl-alt-@]\n",
			"#6 key-down f12 -> unhandled [f12]\n",
			"#7 text \"r\" (ctrl) -> unhandled [ctrl-r] processed []\n",
			"#8 text \"``\" -> handled [` `]\n",
		)
	);
}

#[test]
fn records_split_offered_and_processed() {
	let trace = Trace::parse(TRACE).unwrap();
	let records = replay(&trace);

	let rejected = &records[6];
	assert!(!rejected.handled);
	assert_eq!(rejected.offered, vec!["ctrl-r".to_string()]);
	assert!(rejected.processed.is_empty());

	let fallback = &records[7];
	assert_eq!(fallback.processed, vec!["`".to_string(), "`".to_string()]);
}

#[test]
fn replay_does_not_mutate_trace_consumer() {
	let trace = Trace::parse(TRACE).unwrap();
	let first = replay(&trace);
	let second = replay(&trace);
	assert_eq!(first, second);
}

#[test]
fn missing_file_reports_path() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("missing.toml");

	let err = Trace::load(&path).unwrap_err();
	assert!(matches!(err, TraceError::Io { ref path, .. } if path.ends_with("missing.toml")));
	assert!(err.to_string().contains("missing.toml"));
}
