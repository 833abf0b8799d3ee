//! Interactive terminal session: render the board, read the form from input
//! lines, and apply create results as they come back.

use crate::{BoardResult, Notifier, ProjectBoard, ProjectForm, render};

use std::io::Write;

use log::info;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Typing this on its own line ends the session.
pub const QUIT_COMMAND: &str = ":q";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Description,
}

impl Field {
    fn prompt(&self) -> &'static str {
        match self {
            Self::Name => "Project name: ",
            Self::Description => "Description: ",
        }
    }
}

/// Drive `board` until the input ends or the user quits.
///
/// Lines alternate between the name and description fields; after each
/// description the form is submitted. The session waits for in-flight
/// creates before returning.
pub async fn run<N, R, W>(board: &mut ProjectBoard<N>, input: R, out: &mut W) -> BoardResult<()>
where
    N: Notifier,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{}", render(board.state()))?;
    out.flush()?;

    board.load().await;
    writeln!(out)?;
    write!(out, "{}", render(board.state()))?;
    writeln!(out, "\nEnter a name and description to create a project ({QUIT_COMMAND} to quit).")?;

    let submitter = board.submitter();
    let mut form = ProjectForm::new(move |input| submitter.submit(input));
    let mut field = Field::Name;
    let mut lines = input.lines();

    prompt(out, field)?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                if line.trim() == QUIT_COMMAND {
                    break;
                }

                field = match field {
                    Field::Name => {
                        form.set_name(line);
                        Field::Description
                    }
                    Field::Description => {
                        form.set_description(line);
                        form.submit();
                        Field::Name
                    }
                };

                prompt(out, field)?;
            }
            Some(event) = board.next_event() => {
                board.apply(event);
                writeln!(out)?;
                write!(out, "{}", render(board.state()))?;
                prompt(out, field)?;
            }
        }
    }

    if board.pending() > 0 {
        info!("Waiting for {} create requests", board.pending());
        board.settle().await;
    }

    writeln!(out)?;
    write!(out, "{}", render(board.state()))?;
    out.flush()?;

    Ok(())
}

fn prompt<W: Write>(out: &mut W, field: Field) -> BoardResult<()> {
    write!(out, "{}", field.prompt())?;
    out.flush()?;
    Ok(())
}
