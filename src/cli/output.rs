use anyhow::Result;

use crate::workflow::Report;

/// Print a plain-text representation of a one-shot result: one synonym per
/// line, then the feedback message if there is one.
pub(crate) fn print_plain(report: &Report) {
	for synonym in &report.synonyms {
		println!("{synonym}");
	}

	if let Some(feedback) = &report.feedback {
		if feedback.is_success() {
			println!("{feedback}");
		} else {
			eprintln!("{feedback}");
		}
	}
}

/// Format the report as a JSON string.
pub(crate) fn format_report_json(report: &Report) -> Result<String> {
	Ok(serde_json::to_string_pretty(report)?)
}

/// Print the JSON representation of the report.
pub(crate) fn print_json(report: &Report) -> Result<()> {
	println!("{}", format_report_json(report)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;
	use synonyms::Feedback;

	use super::*;

	#[test]
	fn json_format_includes_synonyms() {
		let report = Report {
			word: "same".into(),
			synonyms: vec!["alike".into(), "akin".into()],
			feedback: None,
		};

		let json = format_report_json(&report).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["word"], "same");
		assert_eq!(value["synonyms"][1], "akin");
		assert!(value["feedback"].is_null());
	}

	#[test]
	fn json_format_includes_feedback_kind() {
		let report = Report {
			word: "happy".into(),
			synonyms: vec!["glad".into()],
			feedback: Some(Feedback::success("Synonyms added successfully!")),
		};

		let json = format_report_json(&report).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["feedback"]["kind"], "success");
		assert_eq!(value["feedback"]["message"], "Synonyms added successfully!");
	}
}
