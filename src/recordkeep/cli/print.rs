use colored::Colorize;
use recordkeep::model::EditableRecord;
use unicode_width::UnicodeWidthStr;

const ID_WIDTH: usize = 14;
const TYPE_WIDTH: usize = 6;

pub(super) fn print_success(message: &str) {
    println!("{}", message.green());
}

pub(super) fn print_warning(message: &str) {
    println!("{}", message.yellow());
}

pub(super) fn print_records(records: &[&EditableRecord]) {
    if records.is_empty() {
        println!("No records found.");
        return;
    }

    let login_width = records
        .iter()
        .map(|r| r.record.login.width())
        .max()
        .unwrap_or(0)
        .max(5);

    for editable in records {
        let record = &editable.record;
        let marks: Vec<String> = record
            .marks
            .iter()
            .map(|m| format!("#{}", m.text))
            .collect();
        let login_pad = login_width - record.login.width();

        let id = format!("{:<width$}", record.id.to_string(), width = ID_WIDTH);
        let record_type = format!("{:<width$}", record.record_type.as_str(), width = TYPE_WIDTH);

        println!(
            "{} {} {}{} {}",
            id.yellow(),
            record_type.cyan(),
            record.login.bold(),
            " ".repeat(login_pad),
            marks.join(" ").dimmed(),
        );
    }
}

pub(super) fn print_record(editable: &EditableRecord) {
    let record = &editable.record;
    let marks: Vec<&str> = record.marks.iter().map(|m| m.text.as_str()).collect();

    println!("{} {}", "id:      ".dimmed(), record.id.to_string().yellow());
    println!("{} {}", "type:    ".dimmed(), record.record_type);
    println!("{} {}", "login:   ".dimmed(), record.login.bold());
    println!("{} {}", "password:".dimmed(), record.password);
    println!("{} {}", "marks:   ".dimmed(), marks.join("; "));
}
