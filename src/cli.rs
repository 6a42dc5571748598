//! Command-line arguments.

use std::io::{self, Read};
use std::path::PathBuf;

use boxen_config::{ColorMode, Config};
use boxen_protocol::{BoxenError, SizeRole, SizeSpec};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "boxen", version, about = "Draw a box around text in the terminal")]
pub struct Cli {
    /// Text to put in the box, one item per argument. Read from stdin when
    /// omitted.
    pub text: Vec<String>,

    /// Border color: a name, a 256-color index or `#rrggbb`
    #[arg(long)]
    pub color: Option<String>,

    /// Border style (see --list-styles)
    #[arg(long)]
    pub style: Option<String>,

    /// Space inside the border: `N`, `V,H` or `T,R,B,L`
    #[arg(long, value_parser = parse_padding)]
    pub padding: Option<SizeSpec>,

    /// Space outside the border: `N`, `V,H` or `T,R,B,L`
    #[arg(long, value_parser = parse_margin)]
    pub margin: Option<SizeSpec>,

    /// Alignment of the text inside the box (left, center, right)
    #[arg(long)]
    pub text_alignment: Option<String>,

    /// Alignment of the box in the terminal (left, center, right)
    #[arg(long)]
    pub box_alignment: Option<String>,

    /// Title drawn in the top border
    #[arg(long)]
    pub title: Option<String>,

    /// Alignment of the title (left, center, right)
    #[arg(long)]
    pub title_alignment: Option<String>,

    /// Subtitle drawn in the bottom border
    #[arg(long)]
    pub subtitle: Option<String>,

    /// Alignment of the subtitle (left, center, right)
    #[arg(long)]
    pub subtitle_alignment: Option<String>,

    /// Stretch the box to the full render width
    #[arg(long)]
    pub fullwidth: bool,

    /// Size the box to its content, overriding a configured `fullwidth`
    #[arg(long, conflicts_with = "fullwidth")]
    pub no_fullwidth: bool,

    /// Render width in columns (defaults to the terminal width)
    #[arg(long)]
    pub width: Option<u16>,

    /// When to emit color (auto, always, never)
    #[arg(long)]
    pub color_mode: Option<ColorMode>,

    /// Read configuration from this file instead of the default locations
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the available border styles and exit
    #[arg(long)]
    pub list_styles: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_padding(text: &str) -> Result<SizeSpec, BoxenError> {
    SizeSpec::parse(text, SizeRole::Padding)
}

fn parse_margin(text: &str) -> Result<SizeSpec, BoxenError> {
    SizeSpec::parse(text, SizeRole::Margin)
}

impl Cli {
    /// Overrides `config` with every flag that was given.
    pub fn apply(&self, config: &mut Config) {
        let options = &mut config.box_options;
        let overrides = [
            (&mut options.color, &self.color),
            (&mut options.style, &self.style),
            (&mut options.text_alignment, &self.text_alignment),
            (&mut options.box_alignment, &self.box_alignment),
            (&mut options.title_alignment, &self.title_alignment),
            (&mut options.subtitle_alignment, &self.subtitle_alignment),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                field.clone_from(value);
            }
        }

        if let Some(padding) = &self.padding {
            options.padding = padding.clone();
        }
        if let Some(margin) = &self.margin {
            options.margin = margin.clone();
        }
        if self.title.is_some() {
            options.title.clone_from(&self.title);
        }
        if self.subtitle.is_some() {
            options.subtitle.clone_from(&self.subtitle);
        }
        if self.fullwidth {
            options.fullwidth = true;
        } else if self.no_fullwidth {
            options.fullwidth = false;
        }

        if self.width.is_some() {
            config.width = self.width;
        }
        if let Some(mode) = self.color_mode {
            config.color_mode = mode;
        }
    }

    /// The content items: the text arguments, or all of `stdin` as a single
    /// item when there are none.
    pub fn content(&self, mut stdin: impl Read) -> io::Result<Vec<String>> {
        if !self.text.is_empty() {
            return Ok(self.text.clone());
        }

        let mut input = String::new();
        stdin.read_to_string(&mut input)?;
        let trimmed = input.strip_suffix('\n').unwrap_or(&input);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(vec![trimmed.to_string()])
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("boxen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn sizes_parse_from_text() {
        let cli = parse(&["--padding", "1,3", "--margin", "2", "hi"]);
        assert_eq!(cli.padding, Some(SizeSpec::Tuple(vec![1, 3])));
        assert_eq!(cli.margin, Some(SizeSpec::Uniform(2)));
        assert_eq!(cli.text, ["hi"]);
    }

    #[test]
    fn bad_size_is_rejected() {
        let err = Cli::try_parse_from(["boxen", "--margin", "wide"]).unwrap_err();
        assert!(err.to_string().contains("margin must be"));
    }

    #[test]
    fn flags_override_config() {
        let mut config = Config::default();
        config.box_options.style = "double".to_string();
        config.box_options.color = "cyan".to_string();

        let cli = parse(&[
            "--style",
            "heavy",
            "--title",
            "T",
            "--fullwidth",
            "--width",
            "40",
            "--color-mode",
            "never",
        ]);
        cli.apply(&mut config);

        assert_eq!(config.box_options.style, "heavy");
        assert_eq!(config.box_options.color, "cyan");
        assert_eq!(config.box_options.title.as_deref(), Some("T"));
        assert!(config.box_options.fullwidth);
        assert_eq!(config.width, Some(40));
        assert_eq!(config.color_mode, ColorMode::Never);
    }

    #[test]
    fn missing_flags_keep_config() {
        let mut config = Config::default();
        config.box_options.subtitle = Some("kept".to_string());
        config.width = Some(50);

        parse(&[]).apply(&mut config);

        assert_eq!(config.box_options.subtitle.as_deref(), Some("kept"));
        assert_eq!(config.width, Some(50));
    }

    #[test]
    fn no_fullwidth_overrides_config() {
        let mut config = Config::default();
        config.box_options.fullwidth = true;

        parse(&["--no-fullwidth"]).apply(&mut config);
        assert!(!config.box_options.fullwidth);

        config.box_options.fullwidth = true;
        parse(&[]).apply(&mut config);
        assert!(config.box_options.fullwidth);
    }

    #[test]
    fn fullwidth_flags_conflict() {
        assert!(Cli::try_parse_from(["boxen", "--fullwidth", "--no-fullwidth"]).is_err());
    }

    #[test]
    fn text_arguments_are_separate_items() {
        let cli = parse(&["one", "two"]);
        assert_eq!(cli.content(io::empty()).unwrap(), ["one", "two"]);
    }

    #[test]
    fn stdin_is_read_without_trailing_newline() {
        let cli = parse(&[]);
        let content = cli.content("line 1\nline 2\n".as_bytes()).unwrap();
        assert_eq!(content, ["line 1\nline 2"]);
    }
}
