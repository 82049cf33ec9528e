use include_dir::{include_dir, Dir};
use unicode_width::UnicodeWidthStr;

use crate::choice::Choice;

static ART_DIR: Dir = include_dir!("src/art");

fn file_name(choice: Choice) -> &'static str {
    match choice {
        Choice::Rock => "rock.txt",
        Choice::Paper => "paper.txt",
        Choice::Scissors => "scissors.txt",
    }
}

/// Hand drawing for the user's side, pointing right.
/// Falls back to the single glyph if the art file is missing.
pub fn hand(choice: Choice) -> Vec<String> {
    ART_DIR
        .get_file(file_name(choice))
        .and_then(|f| f.contents_utf8())
        .map(|s| s.lines().map(str::to_owned).collect())
        .unwrap_or_else(|| vec![choice.symbol().to_owned()])
}

/// Hand drawing for the computer's side, pointing left
pub fn mirrored_hand(choice: Choice) -> Vec<String> {
    mirror(&hand(choice))
}

/// Display width of the widest line
pub fn width(lines: &[String]) -> usize {
    lines.iter().map(|l| l.width()).max().unwrap_or(0)
}

fn mirror(lines: &[String]) -> Vec<String> {
    let w = width(lines);
    lines
        .iter()
        .map(|line| {
            let pad = " ".repeat(w.saturating_sub(line.width()));
            line.chars()
                .chain(pad.chars())
                .rev()
                .map(|c| match c {
                    '(' => ')',
                    ')' => '(',
                    c => c,
                })
                .collect::<String>()
        })
        .collect()
}
