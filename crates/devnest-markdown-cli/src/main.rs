use anyhow::{Context, Result, bail};
use clap::Parser;
use devnest_markdown_config::Config;
use devnest_markdown_engine::{escape_html, render, render_snippet};
use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

#[derive(Parser, Debug)]
#[command(name = "devnest-markdown")]
#[command(version, about = "Render blog markdown to safe HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    devnest-markdown post.md                 Render a post to stdout
    devnest-markdown --snippet comment.md    Render a comment preview
    cat post.md | devnest-markdown --wrap    Render stdin inside a wrapper div")]
struct Cli {
    /// Markdown files to render; reads stdin when none are given
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Render the comment preview snippet instead of the full body
    #[arg(short, long)]
    snippet: bool,

    /// Snippet length in characters
    #[arg(long, value_name = "N")]
    max_chars: Option<usize>,

    /// Wrap output in a div carrying the configured wrapper class
    #[arg(short, long)]
    wrap: bool,

    /// Write <stem>.html per input file into this directory
    #[arg(short, long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Options resolved from the command line over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    snippet_chars: Option<usize>,
    wrapper_class: Option<String>,
    out_dir: Option<PathBuf>,
}

impl Settings {
    fn resolve(cli: &Cli, config: Config) -> Self {
        Self {
            snippet_chars: cli
                .snippet
                .then(|| cli.max_chars.unwrap_or(config.snippet_chars)),
            wrapper_class: cli.wrap.then_some(config.wrapper_class),
            out_dir: cli.out_dir.clone().or(config.output_dir),
        }
    }

    fn render(&self, source: &str) -> String {
        let html = match self.snippet_chars {
            Some(max) => render_snippet(source, max),
            None => render(source),
        };
        match &self.wrapper_class {
            Some(class) => format!("<div class=\"{}\">{html}</div>", escape_html(class)),
            None => html,
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let Some(path) = explicit else {
        log::debug!("Config path: {}", Config::config_path().display());
        return Ok(Config::load()?.unwrap_or_default());
    };
    match Config::load_from_path(path)? {
        Some(config) => Ok(config),
        None => bail!("Config file '{}' not found", path.display()),
    }
}

fn output_path(out_dir: &Path, input: &Path) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .with_context(|| format!("Input '{}' has no file name", input.display()))?;
    let mut name = stem.to_os_string();
    name.push(".html");
    Ok(out_dir.join(name))
}

fn render_file(settings: &Settings, input: &Path, out: &mut impl Write) -> Result<()> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("Failed to read '{}'", input.display()))?;
    let html = settings.render(&source);

    match &settings.out_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create '{}'", dir.display()))?;
            let target = output_path(dir, input)?;
            fs::write(&target, html)
                .with_context(|| format!("Failed to write '{}'", target.display()))?;
            log::info!("Rendered {} -> {}", input.display(), target.display());
        }
        None => writeln!(out, "{html}")?,
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let settings = Settings::resolve(cli, config);
    let mut stdout = io::stdout().lock();

    if cli.files.is_empty() {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read stdin")?;
        writeln!(stdout, "{}", settings.render(&source))?;
        return Ok(());
    }

    for input in &cli.files {
        render_file(&settings, input, &mut stdout)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    run(&cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("devnest-markdown").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_render_full_body_unwrapped() {
        let settings = Settings::resolve(&cli(&[]), Config::default());
        assert_eq!(
            settings,
            Settings {
                snippet_chars: None,
                wrapper_class: None,
                out_dir: None,
            }
        );
        assert_eq!(settings.render("**hi**"), "<p><strong>hi</strong></p>");
    }

    #[rstest]
    #[case(&["--snippet"], Some(400))]
    #[case(&["--snippet", "--max-chars", "5"], Some(5))]
    #[case(&["--max-chars", "5"], None)]
    fn snippet_length_comes_from_flag_or_config(
        #[case] args: &[&str],
        #[case] expected: Option<usize>,
    ) {
        let settings = Settings::resolve(&cli(args), Config::default());
        assert_eq!(settings.snippet_chars, expected);
    }

    #[test]
    fn configured_snippet_length_is_used() {
        let config = Config {
            snippet_chars: 3,
            ..Config::default()
        };
        let settings = Settings::resolve(&cli(&["-s"]), config);
        assert_eq!(settings.render("abcdef"), "<p>abc…</p>");
    }

    #[test]
    fn wrap_uses_configured_class() {
        let config = Config {
            wrapper_class: "post \"body\"".into(),
            ..Config::default()
        };
        let settings = Settings::resolve(&cli(&["--wrap"]), config);
        assert_eq!(
            settings.render("hi"),
            "<div class=\"post &quot;body&quot;\"><p>hi</p></div>"
        );
    }

    #[test]
    fn out_dir_flag_overrides_config() {
        let config = Config {
            output_dir: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };
        let settings = Settings::resolve(&cli(&["--out-dir", "/from/flag"]), config.clone());
        assert_eq!(settings.out_dir, Some(PathBuf::from("/from/flag")));

        let settings = Settings::resolve(&cli(&[]), config);
        assert_eq!(settings.out_dir, Some(PathBuf::from("/from/config")));
    }

    #[test]
    fn output_path_swaps_extension() {
        assert_eq!(
            output_path(Path::new("/out"), Path::new("posts/hello.md")).unwrap(),
            PathBuf::from("/out/hello.html")
        );
        assert!(output_path(Path::new("/out"), Path::new("/")).is_err());
    }

    #[test]
    fn render_file_writes_to_out_dir() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("post.md");
        fs::write(&input, "# Hello").unwrap();
        let out_dir = temp_dir.path().join("html");
        let settings = Settings {
            snippet_chars: None,
            wrapper_class: None,
            out_dir: Some(out_dir.clone()),
        };

        let mut stdout = Vec::new();
        render_file(&settings, &input, &mut stdout).unwrap();

        assert!(stdout.is_empty());
        assert_eq!(
            fs::read_to_string(out_dir.join("post.html")).unwrap(),
            "<h1>Hello</h1>"
        );
    }

    #[test]
    fn render_file_prints_without_out_dir() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("comment.md");
        fs::write(&input, "- a\n- b").unwrap();
        let settings = Settings::resolve(&cli(&[]), Config::default());

        let mut stdout = Vec::new();
        render_file(&settings, &input, &mut stdout).unwrap();

        assert_eq!(
            String::from_utf8(stdout).unwrap(),
            "<ul><li>a</li><li>b</li></ul>\n"
        );
    }

    #[test]
    fn missing_input_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::resolve(&cli(&[]), Config::default());
        let err = render_file(&settings, &temp_dir.path().join("nope.md"), &mut Vec::new())
            .unwrap_err();
        assert!(err.to_string().contains("nope.md"));
    }

    #[test]
    fn explicit_config_must_exist() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_config(Some(&temp_dir.path().join("missing.toml"))).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn explicit_config_is_loaded() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "wrapper_class = \"comment-body\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.wrapper_class, "comment-body");
        assert_eq!(config.snippet_chars, 400);
    }
}
