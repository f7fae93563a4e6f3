use tessella::SolveDetails;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Print a stage-by-stage run summary to stderr.
pub fn print_run(input_lines: usize, details: &SolveDetails, color: bool) {
    let palette = ansi::Palette::new(color);
    eprintln!("\n{}", palette.bold(palette.paint(format!("⚙  Solved {} input lines", input_lines), ansi::CYAN)));

    eprintln!("\n{}", palette.paint("━━━ Stages ━━━", ansi::GRAY));
    for stage in &details.stages {
        eprintln!(
            "  {} {}  {}",
            palette.paint(format!("{}:", stage.name), ansi::BLUE),
            if stage.kept > 0 {
                palette.paint(format!("✓ kept {}/{}", stage.kept, stage.input_items), ansi::GREEN)
            } else {
                palette.dim(format!("✗ kept {}/{}", stage.kept, stage.input_items))
            },
            palette.dim(format!("{:?}", stage.duration)),
        );
        if !stage.samples.is_empty() {
            eprintln!("    {}", palette.dim(stage.samples.join(", ")));
        }
    }

    eprintln!("\n{}", palette.paint("━━━ Results ━━━", ansi::GRAY));
    if details.words_solved == 0 {
        eprintln!("{}", palette.dim("  No words could be spelled"));
        eprintln!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        eprintln!("  • Every line was dropped by sanitation (case, whitespace, non-letters)");
        eprintln!("  • No vocabulary symbols occur in the surviving words");
        eprintln!("  • Occurrences never line up into a full tiling");
        eprintln!("\n{}", palette.dim("  Tip: Set TESSELLA_DEBUG_STAGES=1 to see per-stage drop traces"));
    } else {
        eprintln!(
            "  {} {}",
            palette.bold(palette.paint(format!("{} words spelled", details.words_solved), ansi::GREEN)),
            palette.paint(format!("({} spellings total)", details.spellings_found), ansi::YELLOW),
        );
    }

    eprintln!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    eprintln!("  Total: {}", palette.paint(format!("{:?}", details.total), ansi::GREEN));
    eprintln!();
}
