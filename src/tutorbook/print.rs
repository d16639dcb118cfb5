use colored::Colorize;
use tutorbook::api::{CmdMessage, MessageLevel};
use tutorbook::model::{PaymentStatus, Person};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 24;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

pub(crate) fn print_error(message: &str) {
    eprintln!("{}", message.red());
}

pub(crate) fn print_persons(persons: &[&Person], note_width: usize) {
    if persons.is_empty() {
        println!("No persons found.");
        return;
    }

    for (i, person) in persons.iter().enumerate() {
        let idx_str = format!("{:>3}. ", i + 1);

        let name = truncate_to_width(person.name().as_str(), NAME_WIDTH);
        let padding = NAME_WIDTH.saturating_sub(name.width());

        let role = match person {
            Person::Student(_) => "S".cyan(),
            Person::Parent(_) => "P".magenta(),
        };

        let status = format!("{:<8}", person.payment_status().as_str());
        let status = match person.payment_status() {
            PaymentStatus::Paid => status.green(),
            PaymentStatus::Unpaid => status.red(),
        };

        let note: String = person
            .note()
            .as_str()
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let note = truncate_to_width(&note, note_width);

        println!(
            "{}{} {}{}  {:<14}{}{}",
            idx_str.yellow(),
            role,
            name.bold(),
            " ".repeat(padding),
            person.phone().as_str(),
            status,
            note.dimmed()
        );

        if let Some(schedule) = person.schedule() {
            if !schedule.is_empty() {
                println!("        {} {}", "⏲".dimmed(), schedule.as_str().dimmed());
            }
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("Amy", 10), "Amy");
    }

    #[test]
    fn long_text_gets_an_ellipsis() {
        let out = truncate_to_width("Needs help with algebra", 10);
        assert_eq!(out, "Needs hel…");
        assert_eq!(out.width(), 10);
    }

    #[test]
    fn wide_characters_count_double() {
        let out = truncate_to_width("数学数学数学", 5);
        assert_eq!(out, "数学…");
    }
}
