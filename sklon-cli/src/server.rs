//! Synchronous request/reply server.
//!
//! Newline-framed TCP: one UTF-8 message per line, one reply line per
//! message, connections and messages handled strictly in order on a
//! single thread. A message body equal to the shutdown sentinel
//! terminates the accept loop without producing a reply.

use std::io::{self, BufRead, BufReader, Write};
use std::net::TcpListener;

use sklon_core::protocol::{process_batch, SHUTDOWN_SENTINEL};

use crate::error::{CliError, CliResult};

/// Bind and run the accept loop until the shutdown sentinel arrives.
pub fn run(host: &str, port: u16) -> CliResult<()> {
    let listener = TcpListener::bind((host, port))
        .map_err(|e| CliError::ServerError(format!("cannot bind {host}:{port}: {e}")))?;
    log::info!("declension server listening on {host}:{port}");

    for incoming in listener.incoming() {
        let stream = match incoming {
            Ok(stream) => stream,
            Err(e) => {
                log::warn!("failed to accept connection: {e}");
                continue;
            }
        };
        if let Ok(peer) = stream.peer_addr() {
            log::debug!("connection from {peer}");
        }

        let reader = BufReader::new(stream.try_clone().map_err(|e| {
            CliError::ServerError(format!("cannot clone connection stream: {e}"))
        })?);
        match serve_connection(reader, &stream) {
            Ok(true) => {
                log::info!("shutdown requested, stopping");
                return Ok(());
            }
            Ok(false) => {}
            Err(e) => log::warn!("connection dropped: {e}"),
        }
    }
    Ok(())
}

/// Serve one connection. Returns `true` when the shutdown sentinel was
/// received and the accept loop should stop.
fn serve_connection<R: BufRead, W: Write>(reader: R, mut writer: W) -> io::Result<bool> {
    for line in reader.lines() {
        let message = line?;
        if message == SHUTDOWN_SENTINEL {
            return Ok(true);
        }
        let reply = process_batch(&message);
        log::debug!("{message} -> {reply}");
        writer.write_all(reply.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    Ok(false)
}
