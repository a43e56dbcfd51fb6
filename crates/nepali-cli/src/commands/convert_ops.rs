use serde::Serialize;

use nepali_core::convert;
use nepali_session::TextField;

#[derive(Debug, Serialize)]
struct ConvertOutput<'a> {
    input: &'a str,
    text: String,
    cursor: usize,
    replacements: usize,
}

#[derive(Debug, Serialize)]
struct SimulateStep {
    key: char,
    text: String,
    cursor: usize,
    changed: bool,
}

pub fn convert_cmd(text: &str, cursor: Option<usize>, json: bool) {
    let cursor = cursor.unwrap_or_else(|| text.chars().count());
    let result = convert(text, cursor);
    if json {
        let out = ConvertOutput {
            input: text,
            text: result.text,
            cursor: result.cursor,
            replacements: result.replacements,
        };
        println!("{}", die!(serde_json::to_string(&out), "Error: {}"));
    } else {
        println!("{}", result.text);
        println!("cursor: {}", result.cursor);
    }
}

/// Feed `text` into a field one character at a time, printing every step.
pub fn simulate_cmd(text: &str, json: bool) {
    let mut field = TextField::global();
    let mut steps = Vec::new();
    for key in text.chars() {
        let mut chars: Vec<char> = field.text().chars().collect();
        let at = field.cursor();
        chars.insert(at, key);
        let raw: String = chars.into_iter().collect();
        let resp = field.handle_change(&raw, at + 1);
        steps.push(SimulateStep {
            key,
            text: resp.text,
            cursor: resp.restore.offset(),
            changed: resp.changed,
        });
    }

    if json {
        println!("{}", die!(serde_json::to_string_pretty(&steps), "Error: {}"));
        return;
    }
    for step in &steps {
        let mark = if step.changed { "*" } else { " " };
        println!("{} {:?} -> {} (cursor {})", mark, step.key, step.text, step.cursor);
    }
}
