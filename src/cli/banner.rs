//! ASCII art banner for interactive mode.

use std::io::IsTerminal;

/// ANSI true-color escape sequences for the banner palette.
struct Colors {
    gutter: &'static str,
    claim: &'static str,
    cite: &'static str,
    title: &'static str,
    subtitle: &'static str,
    reset: &'static str,
}

const COLOR: Colors = Colors {
    gutter: "\x1b[38;2;95;135;175m",    // Slate blue
    claim: "\x1b[38;2;220;220;220m",    // Chalk
    cite: "\x1b[38;2;130;170;110m",     // Sage
    title: "\x1b[1;38;2;215;175;95m",   // Bold amber
    subtitle: "\x1b[38;2;120;120;140m", // Gray-blue
    reset: "\x1b[0m",
};

const PLAIN: Colors = Colors {
    gutter: "",
    claim: "",
    cite: "",
    title: "",
    subtitle: "",
    reset: "",
};

/// Prints the mathsproofbot banner to stdout.
///
/// Renders ANSI true-color when stdout is a terminal,
/// falls back to plain text otherwise.
pub fn print_banner() {
    let c = if std::io::stdout().is_terminal() {
        &COLOR
    } else {
        &PLAIN
    };

    let g = c.gutter;
    let cl = c.claim;
    let ct = c.cite;
    let tt = c.title;
    let st = c.subtitle;
    let r = c.reset;

    println!(
        r#"
{g}│{cl} 1. φ   {ct}[as]{r}      {tt}            _   _                           __ _       _{r}
{g}│───{r}               {tt} _ __  __ _| |_| |_  ___ _ __ _ _ ___  ___ / _| |__  ___| |_{r}
{g}│{cl} 2. ψ   {ct}[→E:1]{r}    {tt}| '  \/ _` |  _| ' \(_-< '_ \ '_/ _ \/ _ \  _| '_ \/ _ \  _|{r}
{cl} 3. φ → ψ {ct}[→I:1-2]{r}  {tt}|_|_|_\__,_|\__|_||_/__/ .__/_| \___/\___/_| |_.__/\___/\__|{r}
                                         {tt}|_|{r}
                   {st}"Send me a theorem."{r}
"#
    );
}
