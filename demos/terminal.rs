use std::fs::read_to_string;
use std::process::exit;

use console::Style;
use textcompare::{compare_buffers, ChangeTag, TextBuffer, TextStats};

/// Renders characters that are invisible in a terminal as placeholders.
fn display_text(value: &str) -> String {
    let mut rv = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            ' ' => rv.push_str("(sp)"),
            '\n' => rv.push_str("(nl)\n"),
            '\t' => rv.push_str("(tab)"),
            '\r' => rv.push_str("(cr)"),
            c if (c as u32) < 32 => rv.push_str(&format!("(#{})", c as u32)),
            c => rv.push(c),
        }
    }
    rv
}

fn main() {
    let args: Vec<_> = std::env::args_os().collect();
    if args.len() != 3 {
        eprintln!("usage: terminal [a] [b]");
        exit(1);
    }

    let (a, b) = match (read_to_string(&args[1]), read_to_string(&args[2])) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("error: {}", err);
            exit(1);
        }
    };

    let a_buf = TextBuffer::new(&a);
    let b_buf = TextBuffer::new(&b);
    let result = compare_buffers(&a_buf, &b_buf);

    for change in result.iter_all_changes(&a_buf, &b_buf) {
        let style = match change.tag() {
            ChangeTag::Delete => Style::new().red().bold(),
            ChangeTag::Insert => Style::new().green().underlined(),
            ChangeTag::Equal => Style::new().dim(),
        };
        print!("{}", style.apply_to(display_text(change.value())));
    }
    println!();
    println!();

    let (a_stats, b_stats) = (TextStats::of(&a), TextStats::of(&b));
    println!("a: {}", a_stats);
    println!("b: {}", b_stats);
    println!("{}", a_stats.delta(&b_stats));

    let style = match result.similarity_percent() {
        p if p >= 90.0 => Style::new().green(),
        p if p >= 70.0 => Style::new().yellow(),
        _ => Style::new().red(),
    };
    println!("{}", style.apply_to(&result).bold());
}
