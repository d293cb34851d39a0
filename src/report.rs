//! Output formatting for feedback, exercises, and tutorials.
//!
//! Supports three output formats:
//! - Text: the plain report, section for section, as returned by `analyze`/`debug`
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::Serialize;
use std::fmt;

use crate::content::{Difficulty, Exercise};
use crate::detect::{AnalysisReport, BugFinding, DebugReport, Feedback};
use crate::session::{ExerciseSelector, TutorialNavigator};

pub const ANALYSIS_HEADER: &str = "📊 Code Analysis Report";
pub const ALGORITHM_HEADER: &str = "💡 Algorithm Analysis:";
pub const BEST_PRACTICES: &str = "🎯 Best Practices:\n• Use meaningful variable names\n• Add proper error handling\n• Consider edge cases\n• Optimize for readability";

pub const DEBUG_HEADER: &str = "🐛 Bug Detection Report";
pub const CORRECTED_HEADER: &str = "✅ Corrected Code:";
pub const DEBUGGING_TIPS: &str = "🔍 Debugging Tips:\n• Use console.log() to trace values\n• Check array bounds and null values\n• Verify function parameters\n• Test with different inputs";

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Pretty,
    Json,
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Format::Text),
            "pretty" => Ok(Format::Pretty),
            "json" => Ok(Format::Json),
            _ => Err(format!(
                "invalid format {:?}, must be 'text', 'pretty', or 'json'",
                s
            )),
        }
    }
}

// =============================================================================
// Text Format
// =============================================================================

impl<R: fmt::Display> fmt::Display for Feedback<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Prompt { message } => f.write_str(message),
            Feedback::Report(r) => fmt::Display::fmt(r, f),
        }
    }
}

/// Header, then one section per remark, then the best-practices footer.
impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\nCode Metrics:\n", ANALYSIS_HEADER)?;
        writeln!(f, "• Lines of code: {}", self.metrics.lines)?;
        writeln!(f, "• Functions defined: {}", self.metrics.functions)?;
        write!(f, "• Variables declared: {}\n\n", self.metrics.variables)?;

        for r in &self.remarks {
            write!(f, "{}\n{}\n\n", ALGORITHM_HEADER, r.remark)?;
        }

        f.write_str(BEST_PRACTICES)
    }
}

impl fmt::Display for DebugReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n", DEBUG_HEADER)?;
        match &self.finding {
            Some(b) => write_finding(f, b),
            None => f.write_str(DEBUGGING_TIPS),
        }
    }
}

fn write_finding(f: &mut fmt::Formatter<'_>, b: &BugFinding) -> fmt::Result {
    write!(f, "🚨 {} Detected:\n\n", b.label)?;
    writeln!(f, "Issue: {}", b.issue)?;
    writeln!(f, "Problem: {}", b.problem)?;
    write!(f, "Fix: {}\n\n", b.fix)?;
    write!(f, "{}\n{}", CORRECTED_HEADER, b.corrected_code)
}

/// Render an exercise card. The solution is included only when visible.
pub fn render_exercise(exercise: &Exercise, show_solution: bool) -> String {
    let mut out = format!(
        "{} [{}]\n\n{}\n\n{}\n\nExample: {}",
        exercise.title, exercise.difficulty, exercise.description, exercise.template, exercise.example
    );
    if show_solution {
        out.push_str("\n\nSolution:\n");
        out.push_str(&exercise.solution);
    }
    out
}

/// Render the active tutorial step, or `None` when no tutorial is running.
pub fn render_tutorial_step(nav: &TutorialNavigator) -> Option<String> {
    let tutorial = nav.tutorial()?;
    let step = nav.current_step()?;
    let progress = nav.progress()?;
    Some(format!(
        "{} - step {}/{} ({}%)\n\n{}\n\n{}\n\n{}",
        tutorial.title,
        nav.step_number()?,
        tutorial.steps.len(),
        progress,
        step.title,
        step.content,
        step.code
    ))
}

// =============================================================================
// JSON Format
// =============================================================================

/// JSON view of the exercise selector.
#[derive(Serialize)]
pub struct JsonExercise<'a> {
    pub title: &'a str,
    pub difficulty: Difficulty,
    pub description: &'a str,
    pub template: &'a str,
    pub example: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<&'a str>,
    pub solution_visible: bool,
}

/// JSON view of the tutorial navigator.
#[derive(Serialize)]
pub struct JsonTutorialStep<'a> {
    pub topic: &'a str,
    pub title: &'a str,
    pub step: usize,
    pub steps: usize,
    pub progress: f64,
    pub step_title: &'a str,
    pub content: &'a str,
    pub code: &'a str,
}

/// Write feedback (analysis or debug) as pretty-printed JSON.
pub fn write_json<R: Serialize>(feedback: &Feedback<R>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(feedback)?;
    println!("{}", json);
    Ok(())
}

pub fn exercise_to_json(selector: &ExerciseSelector) -> Option<JsonExercise<'_>> {
    let ex = selector.current()?;
    let visible = selector.solution_visible();
    Some(JsonExercise {
        title: &ex.title,
        difficulty: ex.difficulty,
        description: &ex.description,
        template: &ex.template,
        example: &ex.example,
        solution: visible.then_some(ex.solution.as_str()),
        solution_visible: visible,
    })
}

pub fn tutorial_to_json(nav: &TutorialNavigator) -> Option<JsonTutorialStep<'_>> {
    let tutorial = nav.tutorial()?;
    let step = nav.current_step()?;
    Some(JsonTutorialStep {
        topic: &tutorial.topic,
        title: &tutorial.title,
        step: nav.step_number()?,
        steps: tutorial.steps.len(),
        progress: nav.progress()?,
        step_title: &step.title,
        content: &step.content,
        code: &step.code,
    })
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write an analysis outcome with terminal colors.
pub fn write_pretty_analysis(feedback: &Feedback<AnalysisReport>) {
    let report = match feedback {
        Feedback::Prompt { message } => {
            println!("  {}", message.yellow());
            return;
        }
        Feedback::Report(r) => r,
    };

    println!();
    println!("  {}", ANALYSIS_HEADER.cyan().bold());
    println!();
    println!("  {}", "Code Metrics:".bold());
    println!("    {:<20} {}", "Lines of code", report.metrics.lines);
    println!("    {:<20} {}", "Functions defined", report.metrics.functions);
    println!("    {:<20} {}", "Variables declared", report.metrics.variables);
    println!();

    for r in &report.remarks {
        print!("  {}", ALGORITHM_HEADER.yellow().bold());
        println!(" {}", format!("[{}]", r.rule).dimmed());
        println!("    {}", r.remark);
        println!();
    }

    write_block(BEST_PRACTICES, |s| s.green().bold());
    println!();
}

/// Write a debug outcome with terminal colors.
pub fn write_pretty_debug(feedback: &Feedback<DebugReport>) {
    let report = match feedback {
        Feedback::Prompt { message } => {
            println!("  {}", message.yellow());
            return;
        }
        Feedback::Report(r) => r,
    };

    println!();
    println!("  {}", DEBUG_HEADER.cyan().bold());
    println!();

    match &report.finding {
        Some(b) => {
            print!("  {}", format!("🚨 {} Detected", b.label).red().bold());
            println!(" {}", format!("[{}]", b.signature).dimmed());
            println!();
            println!("    {} {}", "Issue:".bold(), b.issue);
            println!("    {} {}", "Problem:".bold(), b.problem);
            println!("    {} {}", "Fix:".bold(), b.fix.green());
            println!();
            println!("  {}", CORRECTED_HEADER.green().bold());
            for line in b.corrected_code.lines() {
                println!("    {}", line);
            }
        }
        None => write_block(DEBUGGING_TIPS, |s| s.blue().bold()),
    }
    println!();
}

/// Write an exercise card with terminal colors.
pub fn write_pretty_exercise(selector: &ExerciseSelector) {
    let ex = match selector.current() {
        Some(ex) => ex,
        None => {
            println!(
                "  {}",
                "Select a difficulty level to get started with practice exercises!".dimmed()
            );
            return;
        }
    };

    println!();
    print!("  {}", ex.title.bold());
    println!("  {}", difficulty_badge(ex.difficulty));
    println!();
    println!("  {}", ex.description);
    println!();
    for line in ex.template.lines() {
        println!("    {}", line.blue());
    }
    println!();
    println!("  {} {}", "Example:".bold(), ex.example);

    if selector.solution_visible() {
        println!();
        println!("  {}", "Solution:".green().bold());
        for line in ex.solution.lines() {
            println!("    {}", line);
        }
    }
    println!();
}

/// Write the active tutorial step with terminal colors.
pub fn write_pretty_tutorial(nav: &TutorialNavigator) {
    let (tutorial, step) = match (nav.tutorial(), nav.current_step()) {
        (Some(t), Some(s)) => (t, s),
        _ => {
            println!(
                "  {}",
                "Select a tutorial topic to begin your guided programming journey.".dimmed()
            );
            return;
        }
    };
    let number = nav.step_number().unwrap_or(1);
    let progress = nav.progress().unwrap_or(0.0);

    println!();
    print!("  {}", tutorial.title.cyan().bold());
    println!(
        "  {}",
        format!("step {}/{}", number, tutorial.steps.len()).dimmed()
    );
    println!("  {} {}%", progress_bar(progress, 30), progress);
    println!();
    println!("  {}", format!("{}. {}", number, step.title).bold());
    println!();
    println!("  {}", step.content);
    println!();
    for line in step.code.lines() {
        println!("    {}", line.blue());
    }
    println!();
}

fn write_block(block: &str, title_style: impl Fn(&str) -> ColoredString) {
    let mut lines = block.lines();
    if let Some(title) = lines.next() {
        println!("  {}", title_style(title));
    }
    for line in lines {
        println!("    {}", line);
    }
}

fn difficulty_badge(d: Difficulty) -> ColoredString {
    let label = format!("[{}]", d);
    match d {
        Difficulty::Beginner => label.green(),
        Difficulty::Intermediate => label.yellow(),
        Difficulty::Advanced => label.red(),
    }
}

/// Fixed-width bar for a percentage in [0, 100].
fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
