use anyhow::{Context, Result};
use console::Style;
use keysmith::{Evaluation, StrengthTier, seed};
use rpassword::read_password;
use std::io::{self, Write};
use zeroize::Zeroizing;

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_tree_glyphs(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("├─", "└─")
    } else {
        ("|-", "`-")
    }
}

fn tier_style(tier: StrengthTier, color_support: bool) -> Style {
    if !color_support {
        return Style::new();
    }

    match xterm_index(tier.color()) {
        Some(index) => Style::new().color256(index).bold(),
        None => Style::new().bold(),
    }
}

/// Nearest entry of the xterm-256 colour cube for a `#rrggbb` string.
fn xterm_index(hex: &str) -> Option<u8> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    let channel = |i: usize| -> Option<u16> {
        let value = u8::from_str_radix(hex.get(i..i + 2)?, 16).ok()?;
        Some((value as u16 * 5 + 127) / 255)
    };

    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    Some((16 + 36 * r + 6 * g + b) as u8)
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 { one } else { many }
}

fn class_names(evaluation: &Evaluation) -> String {
    let classes = &evaluation.classes;
    let names: Vec<&str> = [
        (classes.lower, "lower"),
        (classes.upper, "upper"),
        (classes.digit, "digit"),
        (classes.symbol, "symbol"),
    ]
    .into_iter()
    .filter_map(|(present, name)| present.then_some(name))
    .collect();

    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

fn prompt_hidden(prompt: &str) -> Result<Zeroizing<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    read_password()
        .map(Zeroizing::new)
        .with_context(|| format!("Failed to read {}", prompt.trim_end_matches([':', ' '])))
}

pub fn prompt_seed() -> Result<Zeroizing<[u8; seed::KEY_LEN]>> {
    let phrase = prompt_hidden("Seed: ")?;
    seed::derive_key(&phrase).context("Cannot derive a keystream from the seed phrase")
}

pub fn prompt_password() -> Result<Zeroizing<String>> {
    prompt_hidden("Password: ")
}

/// Best effort. A failure is logged and never affects what was printed.
pub fn copy_to_clipboard(text: &str) {
    let Some(mut context) = copypasta_ext::try_context() else {
        log::warn!("No clipboard available, password not copied");
        return;
    };

    match context.set_contents(text.to_owned()) {
        Ok(()) => log::info!("Password copied to clipboard"),
        Err(e) => log::warn!("Failed to copy password to clipboard: {}", e),
    }
}

pub fn display_password(
    index: usize,
    password: &str,
    evaluation: &Evaluation,
    pool_size: usize,
    options: &DisplayOptions,
) {
    if options.quiet {
        println!("Out[{}]:\n{}", index, password);
    } else {
        println!("Out[{}]:\n{}\n", index, password);
        display_stats(evaluation, Some(pool_size), options);
    }
}

pub fn display_evaluation(evaluation: &Evaluation, options: &DisplayOptions) {
    if options.quiet {
        println!("{}", evaluation.tier);
    } else {
        println!();
        display_stats(evaluation, None, options);
    }
}

fn display_stats(evaluation: &Evaluation, pool_size: Option<usize>, options: &DisplayOptions) {
    let (branch, last) = get_tree_glyphs(options.unicode_support);
    let style = tier_style(evaluation.tier, options.color_support);

    println!("Stats:");
    println!(
        "  {} Length     {} {}",
        branch,
        evaluation.length,
        plural(evaluation.length, "char", "chars")
    );

    if let Some(pool_size) = pool_size {
        println!("  {} Pool       {} chars", branch, pool_size);
    }

    println!("  {} Classes    {}", branch, class_names(evaluation));
    println!("  {} Score      {}", branch, evaluation.score);
    println!(
        "  {} Strength   {}",
        last,
        style.apply_to(evaluation.tier.label())
    );
    println!();
}
