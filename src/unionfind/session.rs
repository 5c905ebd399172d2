use super::UnionFind;
use super::{SessionError, UnionFindError};
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use std::io::Write;

/// A [`UnionFind`] paired with a configurable print target.
///
/// With `verbose` set, every union is logged as it is applied.
#[derive(Debug)]
pub struct ForestSession {
    forest: UnionFind,
    verbose: bool,
    stream: PrintTarget,
}

impl ForestSession {
    pub fn new(n: usize, verbose: bool) -> Self {
        Self {
            forest: UnionFind::new(n),
            verbose,
            stream: PrintTarget::default(),
        }
    }

    pub fn forest(&self) -> &UnionFind {
        &self.forest
    }

    /// Forwards to [`UnionFind::union`].  If the union was applied but the
    /// log line could not be written, the error is [`SessionError::Log`]
    /// carrying whether two components were merged.
    pub fn union(&mut self, p: usize, q: usize) -> Result<bool, SessionError<UnionFindError>> {
        let merged = self.forest.union(p, q).map_err(SessionError::Operation)?;
        if self.verbose {
            let outcome = if merged { "merged" } else { "already connected" };
            writeln!(
                self.stream,
                "union({}, {}): {} ({} components)",
                p,
                q,
                outcome,
                self.forest.count()
            )
            .map_err(|source| SessionError::Log {
                outcome: merged,
                source,
            })?;
        }
        Ok(merged)
    }

    pub fn find(&self, site: usize) -> Result<usize, UnionFindError> {
        self.forest.find(site)
    }

    pub fn connected(&self, p: usize, q: usize) -> Result<bool, UnionFindError> {
        self.forest.connected(p, q)
    }

    pub fn count(&self) -> usize {
        self.forest.count()
    }

    /// Writes the root of every site, one per line.
    pub fn print_roots(&mut self) -> std::io::Result<()> {
        for root in self.forest.site_roots() {
            writeln!(self.stream, "{}", root)?;
        }
        self.stream.flush()
    }

    /// Writes `1` or `0` for each pair of connected sites in `pairs`.
    pub fn print_connected(
        &mut self,
        pairs: &[(usize, usize)],
    ) -> Result<(), SessionError<UnionFindError>> {
        for &(p, q) in pairs {
            let connected = self.forest.connected(p, q).map_err(SessionError::Operation)?;
            writeln!(self.stream, "{}", u8::from(connected))?;
        }
        Ok(())
    }

    pub fn print_count(&mut self) -> std::io::Result<()> {
        writeln!(self.stream, "{}", self.forest.count())
    }
}

impl ConfigurablePrintTarget for ForestSession {
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}

#[test]
fn test_forest_session_log() {
    let mut session = ForestSession::new(3, true);
    session.print_to_buffer();
    assert!(session.union(0, 1).unwrap());
    assert!(!session.union(1, 0).unwrap());
    assert!(matches!(
        session.union(0, 3),
        Err(SessionError::Operation(UnionFindError::OutOfRange { site: 3, len: 3 }))
    ));
    session.print_connected(&[(0, 1), (0, 2)]).unwrap();
    session.print_roots().unwrap();
    session.print_count().unwrap();

    let out = session.get_print_buffer().unwrap();
    assert_eq!(
        out,
        "union(0, 1): merged (2 components)\n\
         union(1, 0): already connected (2 components)\n\
         1\n0\n0\n0\n2\n2\n"
    );
}

#[cfg(test)]
struct BrokenStream;

#[cfg(test)]
impl Write for BrokenStream {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken"))
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_forest_session_log_failure() {
    let mut session = ForestSession::new(3, true);
    session.print_to_stream(Box::new(BrokenStream));

    let err = session.union(0, 1).unwrap_err();
    assert!(matches!(err, SessionError::Log { outcome: true, .. }));
    assert_eq!(session.count(), 2);
    assert_eq!(session.union(1, 0).unwrap_err().outcome(), Some(false));

    // rejected unions are still reported as such
    assert!(matches!(
        session.union(0, 5),
        Err(SessionError::Operation(UnionFindError::OutOfRange { site: 5, len: 3 }))
    ));
    assert!(session.print_roots().is_err());
}

#[test]
fn test_forest_session_quiet() {
    let mut session = ForestSession::new(2, false);
    session.print_to_buffer();
    session.union(0, 1).unwrap();
    assert_eq!(session.count(), 1);
    assert_eq!(session.get_print_buffer().unwrap(), "");
}
