//! Terminal frontend over the list controller
//!
//! Reads one command per line (`n`ext, `p`revious, `r`efresh, `q`uit) and
//! prints the rendered view after every settled fetch.

use crate::client::{ListController, StuffApi};
use crate::error::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const HELP: &str = "[n]ext  [p]revious  [r]efresh  [q]uit";

/// A parsed input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Next,
    Previous,
    Refresh,
    Quit,
    Unknown,
}

impl Command {
    fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "n" | "next" => Self::Next,
            "p" | "prev" | "previous" => Self::Previous,
            "r" | "refresh" => Self::Refresh,
            "q" | "quit" | "exit" => Self::Quit,
            _ => Self::Unknown,
        }
    }
}

/// Run the interactive loop until `quit` or end of input
pub async fn browse<A, R, W>(
    controller: &mut ListController<A>,
    input: R,
    output: &mut W,
) -> Result<()>
where
    A: StuffApi + 'static,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    controller.mount();
    controller.settle().await;
    print_view(controller, output)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Quit => break,
            Command::Next => {
                if !controller.next_page() {
                    writeln!(output, "Already on the last page")?;
                    continue;
                }
            }
            Command::Previous => {
                if !controller.previous_page() {
                    writeln!(output, "Already on the first page")?;
                    continue;
                }
            }
            Command::Refresh => controller.refresh(),
            Command::Unknown => {
                writeln!(output, "{HELP}")?;
                continue;
            }
        }
        controller.settle().await;
        print_view(controller, output)?;
    }

    Ok(())
}

fn print_view<A, W>(controller: &ListController<A>, output: &mut W) -> Result<()>
where
    A: StuffApi + 'static,
    W: Write,
{
    writeln!(output, "{}\n", controller.view())?;
    writeln!(output, "{HELP}")?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::{PageNumber, PAGE_SIZE};
    use crate::types::{NewStuff, Stuff};
    use async_trait::async_trait;
    use test_case::test_case;

    /// Serves pages out of a fixed number of demo items
    struct FixedApi {
        total: u64,
    }

    #[async_trait]
    impl StuffApi for FixedApi {
        async fn fetch_page(&self, page: PageNumber) -> Result<Vec<Stuff>> {
            let window = page.window();
            let end = (window.offset + window.limit).min(self.total);
            Ok((window.offset + 1..=end)
                .map(|id| {
                    let new = NewStuff::demo(id as usize);
                    Stuff {
                        id: id as i64,
                        name: new.name,
                        description: new.description,
                    }
                })
                .collect())
        }
    }

    async fn run(total: u64, script: &str) -> (String, PageNumber) {
        let mut controller = ListController::new(FixedApi { total });
        let mut output = Vec::new();
        browse(&mut controller, script.as_bytes(), &mut output)
            .await
            .unwrap();
        (
            String::from_utf8(output).unwrap(),
            controller.state().current_page,
        )
    }

    #[test_case("n", Command::Next)]
    #[test_case(" Next ", Command::Next)]
    #[test_case("p", Command::Previous)]
    #[test_case("prev", Command::Previous)]
    #[test_case("r", Command::Refresh)]
    #[test_case("Q", Command::Quit)]
    #[test_case("", Command::Unknown)]
    #[test_case("jump 3", Command::Unknown)]
    fn test_command_parse(line: &str, expected: Command) {
        assert_eq!(Command::parse(line), expected);
    }

    #[tokio::test]
    async fn test_renders_first_page_on_start() {
        let (output, page) = run(12, "").await;

        assert_eq!(page, PageNumber::FIRST);
        assert!(output.contains("Stuff Manager"));
        assert!(output.contains("Stuff Item 10"));
        assert!(!output.contains("Stuff Item 11"));
        assert!(output.contains("(Previous)  Page 1  [Next]"));
    }

    #[tokio::test]
    async fn test_next_then_previous() {
        let (output, page) = run(12, "n\np\n").await;

        assert_eq!(page, PageNumber::FIRST);
        assert!(output.contains("Stuff Item 12"));
        assert!(output.contains("[Previous]  Page 2  (Next)"));
    }

    #[tokio::test]
    async fn test_next_on_last_page_is_refused() {
        let (output, page) = run(12, "n\nn\n").await;

        assert_eq!(page.get(), 2);
        assert!(output.contains("Already on the last page"));
    }

    #[tokio::test]
    async fn test_previous_on_first_page_is_refused() {
        let (output, _) = run(PAGE_SIZE * 3, "p\n").await;
        assert!(output.contains("Already on the first page"));
    }

    #[tokio::test]
    async fn test_quit_stops_reading() {
        let (_, page) = run(PAGE_SIZE * 3, "q\nn\n").await;
        assert_eq!(page, PageNumber::FIRST);
    }

    #[tokio::test]
    async fn test_unknown_command_prints_help() {
        let (output, _) = run(1, "?\n").await;
        assert_eq!(output.matches(HELP).count(), 2);
    }
}
