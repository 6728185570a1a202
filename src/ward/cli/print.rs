use colored::Colorize;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;
use ward::api::{CmdMessage, MessageLevel, PatientStats};
use ward::config::WardConfig;
use ward::model::Patient;

const MIN_FRAME_WIDTH: usize = 33;

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => format!("Success: {}", message.content).green(),
            MessageLevel::Warning => format!("Warning: {}", message.content).yellow(),
            MessageLevel::Error => format!("Error: {}", message.content).red(),
        };
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// A framed record block. The frame grows with the widest line.
pub fn print_patient<W: Write>(out: &mut W, patient: &Patient) -> io::Result<()> {
    let lines = [
        format!("ID: {}", patient.id),
        format!("Name: {}", patient.name),
        format!("Age: {}", patient.age),
        format!("Gender: {}", patient.gender),
        format!("History: {}", patient.medical_history),
    ];
    let width = lines
        .iter()
        .map(|l| l.width())
        .max()
        .unwrap_or(0)
        .max(MIN_FRAME_WIDTH);
    let frame = "-".repeat(width);

    writeln!(out, "{}", frame.dimmed())?;
    for line in &lines {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "{}", frame.dimmed())
}

pub fn print_patients<W: Write>(out: &mut W, patients: &[Patient]) -> io::Result<()> {
    for patient in patients {
        print_patient(out, patient)?;
    }
    Ok(())
}

pub fn print_all_patients<W: Write>(out: &mut W, patients: &[Patient]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "--- All Patient Records (Sorted by ID) ---".bold())?;
    print_patients(out, patients)?;
    writeln!(out, "{}", "-".repeat(42))
}

pub fn print_stats<W: Write>(out: &mut W, stats: &PatientStats) -> io::Result<()> {
    writeln!(out, "{}", "--- Statistics ---".bold())?;
    writeln!(out, "Total patients: {}", stats.total)?;
    writeln!(out, "Average age: {}", stats.average_age)?;

    let label_width = stats
        .gender_distribution
        .keys()
        .map(|k| k.width())
        .max()
        .unwrap_or(0);
    for (gender, count) in &stats.gender_distribution {
        let padding = " ".repeat(label_width - gender.width());
        writeln!(out, "  {}{} : {}", gender, padding, count)?;
    }
    Ok(())
}

pub fn config_line(config: &WardConfig, key: &str) -> Option<String> {
    match key {
        "seed-demo-data" => Some(format!("seed-demo-data = {}", config.seed_demo_data)),
        "data-file" => Some(format!(
            "data-file = {}",
            config
                .data_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        )),
        _ => None,
    }
}

pub fn print_config<W: Write>(out: &mut W, config: &WardConfig) -> io::Result<()> {
    for key in ["seed-demo-data", "data-file"] {
        if let Some(line) = config_line(config, key) {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn renders_record_block() {
        let patient = Patient::new(101, "John Doe", 30, "M", "Flu");
        let text = render(|out| print_patient(out, &patient));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "-".repeat(MIN_FRAME_WIDTH));
        assert_eq!(lines[1], "ID: 101");
        assert_eq!(lines[5], "History: Flu");
    }

    #[test]
    fn frame_grows_with_long_history() {
        let history = "x".repeat(60);
        let patient = Patient::new(1, "A", 1, "F", history);
        let text = render(|out| print_patient(out, &patient));
        assert_eq!(text.lines().next().unwrap().len(), "History: ".len() + 60);
    }

    #[test]
    fn prefixes_message_levels() {
        let messages = vec![
            CmdMessage::success("Patient ID 5 deleted."),
            CmdMessage::error("Patient ID 5 not found."),
            CmdMessage::info("Record not found."),
        ];
        let text = render(|out| print_messages(out, &messages));
        assert_eq!(
            text,
            "Success: Patient ID 5 deleted.\nError: Patient ID 5 not found.\nRecord not found.\n"
        );
    }

    #[test]
    fn aligns_gender_labels() {
        let mut gender_distribution = BTreeMap::new();
        gender_distribution.insert("F".to_string(), 2);
        gender_distribution.insert("Other".to_string(), 1);
        let stats = PatientStats {
            total: 3,
            average_age: 40,
            gender_distribution,
        };
        let text = render(|out| print_stats(out, &stats));
        assert!(text.contains("  F     : 2\n"));
        assert!(text.contains("  Other : 1\n"));
    }

    #[test]
    fn shows_config_values() {
        let text = render(|out| print_config(out, &WardConfig::default()));
        assert_eq!(text, "seed-demo-data = true\ndata-file = \n");
    }
}
