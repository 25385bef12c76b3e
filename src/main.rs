use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use owo_colors::{OwoColorize, Stream::Stderr};

use crate::{
    cli::Cli,
    encyclopedia::wikipedia::Wikipedia,
    report::ReportTable,
    resolver::{Resolver, Skip},
};

mod cli;
mod disambiguate;
mod encyclopedia;
mod infobox;
mod locale;
mod movie;
mod normalize;
mod report;
mod resolver;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let titles = cli::read_titles(&args.input)?;

    let wikipedia = Wikipedia::new(Duration::from_secs(args.timeout));
    let resolver = Resolver::new(&wikipedia)
        .limit(args.limit)
        .locale(args.locale);

    let progress = progress_bar(titles.len() as u64, args.quiet);
    let mut movies = Vec::new();
    let mut skipped = 0usize;

    for title in titles {
        progress.set_message(title.clone());
        match resolver.resolve(&title) {
            Ok(resolved) => {
                if !args.quiet {
                    progress.suspend(|| {
                        eprintln!(
                            "{} {title} {}",
                            "✓".if_supports_color(Stderr, |t| t.green()),
                            format!("({})", resolved.article)
                                .if_supports_color(Stderr, |t| t.dimmed()),
                        )
                    });
                }
                movies.push((title, resolved.movie));
            }
            Err(err) => match err.downcast::<Skip>() {
                Ok(skip) => {
                    skipped += 1;
                    progress.suspend(|| {
                        eprintln!(
                            "{} {title}: {skip}",
                            "✗".if_supports_color(Stderr, |t| t.red())
                        )
                    });
                }
                Err(err) => {
                    progress.abandon();
                    return Err(err.context(format!("while looking up {title:?}")));
                }
            },
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    let table = ReportTable::from_movies(args.header_language, &movies);
    report::write(&table, &args.output)?;

    eprintln!(
        "{} {}  {} {}",
        "✓".if_supports_color(Stderr, |t| t.green()),
        movies.len(),
        "✗".if_supports_color(Stderr, |t| t.red()),
        skipped
    );
    eprintln!("Report written to {}", args.output.display());
    Ok(())
}

fn progress_bar(len: u64, quiet: bool) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if quiet {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    } else if let Ok(style) =
        ProgressStyle::with_template("{spinner} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}")
    {
        pb.set_style(style.progress_chars("=> "));
    }
    pb
}
