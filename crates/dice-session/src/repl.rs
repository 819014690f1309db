//! Line-oriented conversation loop.

use std::io::{self, BufRead, Write};

use crate::dialogue::{Session, Turn};

/// Run turns read from `input` until `exit` or end of input
///
/// With `echo`, each input line is written after the prompt, so a script
/// run reads like an interactive one. Defects are logged and reported as
/// `Internal error: ...`; the session carries on.
pub fn converse<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut output: W,
    echo: bool,
) -> io::Result<()> {
    let margin = session.config().margin();
    let prompt = session.config().prompt.clone();
    let show_logic = session.config().show_logic;

    writeln!(output, "{}", margin)?;
    let mut line = String::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        if echo {
            writeln!(output, "{}", line.trim_end())?;
        }

        match session.handle(&line) {
            Ok(Turn::Skip) => continue,
            Ok(Turn::Exit) => break,
            Ok(Turn::Respond(response)) => {
                if show_logic {
                    if let Some(interpretation) = session.last_interpretation() {
                        writeln!(output, "{}", interpretation.composed)?;
                        writeln!(output, "{}", interpretation.simplified)?;
                        writeln!(output)?;
                    }
                }
                writeln!(output, "{}{}", margin, response)?;
            }
            Err(e) => {
                tracing::error!(input = %line.trim(), error = %e, "turn aborted");
                writeln!(output, "{}Internal error: {}", margin, e)?;
            }
        }
    }
    Ok(())
}
