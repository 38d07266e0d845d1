// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plain-text rendering of collection entities, one line per record.

use up_core::models::{Class, Message, Notification, Payment};

/// Format a class as `CODE  Name  (Instructor)  Schedule`.
///
/// Empty optional fields are left out rather than rendered blank.
pub fn format_class_line(class: &Class) -> String {
    let mut line = format!("{}  {}", class.code, class.name);
    if !class.instructor.is_empty() {
        line.push_str(&format!("  ({})", class.instructor));
    }
    if !class.schedule.is_empty() {
        line.push_str(&format!("  {}", class.schedule));
    }
    line
}

/// Format a notification, prefixing the class scope when present.
pub fn format_notification_line(notification: &Notification) -> String {
    match &notification.class_code {
        Some(code) => format!(
            "[{}] {}: {}",
            code, notification.title, notification.body
        ),
        None => format!("{}: {}", notification.title, notification.body),
    }
}

/// Format a payment as `student  term  $amount  status`.
pub fn format_payment_line(payment: &Payment) -> String {
    format!(
        "{}  {}  ${:.2}  {}",
        payment.student_id, payment.term, payment.amount, payment.status
    )
}

/// Format a chat message as `author: content`.
pub fn format_message_line(message: &Message) -> String {
    format!("{}: {}", message.author, message.content)
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
