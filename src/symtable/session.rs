use super::*;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use std::io::Write;

/// A symbol table together with its settings and a print target.
///
/// Table operations are forwarded to the underlying [`AnySymbolTable`].
/// With `verbose` set, each operation and its outcome is logged to the
/// print target as it happens.
#[derive(Debug)]
pub struct TableSession {
    table: AnySymbolTable,
    settings: TableSettings,
    stream: PrintTarget,
}

impl TableSession {
    pub fn new(settings: TableSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            table: AnySymbolTable::new(&settings),
            settings,
            stream: PrintTarget::default(),
        })
    }

    pub fn table(&self) -> &AnySymbolTable {
        &self.table
    }

    pub fn settings(&self) -> &TableSettings {
        &self.settings
    }

    /// Forwards to [`SymbolTable::put`].  If the entry was stored but the
    /// log line could not be written, the error is [`SessionError::Log`]
    /// carrying the result of the put.
    pub fn put(&mut self, key: i32, value: i32) -> Result<bool, SessionError<TableError>> {
        let inserted = self.table.put(key, value);
        if self.settings.verbose {
            let outcome = if inserted { "inserted" } else { "updated" };
            writeln!(self.stream, "put({}, {}): {}", key, value, outcome).map_err(|source| {
                SessionError::Log {
                    outcome: inserted,
                    source,
                }
            })?;
        }
        Ok(inserted)
    }

    /// Forwards to [`SymbolTable::delete`], reporting log failures like
    /// [`TableSession::put`].
    pub fn delete(&mut self, key: i32) -> Result<bool, SessionError<TableError>> {
        let found = self.table.delete(key);
        if self.settings.verbose {
            let outcome = if found { "deleted" } else { "absent" };
            writeln!(self.stream, "delete({}): {}", key, outcome).map_err(|source| {
                SessionError::Log {
                    outcome: found,
                    source,
                }
            })?;
        }
        Ok(found)
    }

    pub fn get(&mut self, key: i32) -> Result<i32, SessionError<TableError>> {
        let value = self.table.get(key);
        if self.settings.verbose {
            match value {
                Ok(v) => writeln!(self.stream, "get({}): {}", key, v)?,
                Err(ref e) => writeln!(self.stream, "get({}): {}", key, e)?,
            }
        }
        value.map_err(SessionError::Operation)
    }

    pub fn contains(&self, key: i32) -> bool {
        self.table.contains(key)
    }

    pub fn size(&self) -> usize {
        self.table.size()
    }

    pub fn print_keys(&mut self) -> std::io::Result<()> {
        writeln!(self.stream, "{}", format_keys(&self.table))
    }

    pub fn print_values(&mut self) -> std::io::Result<()> {
        writeln!(self.stream, "{}", format_values(&self.table))
    }

    pub fn print_table(&mut self) -> std::io::Result<()> {
        writeln!(self.stream, "{}", format_entries(&self.table))
    }

    /// Writes `1` or `0` for the presence of each key in `keys`.
    pub fn print_contains(&mut self, keys: impl IntoIterator<Item = i32>) -> std::io::Result<()> {
        for key in keys {
            writeln!(self.stream, "{}", u8::from(self.table.contains(key)))?;
        }
        self.stream.flush()
    }
}

impl ConfigurablePrintTarget for TableSession {
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
fn test_table_session_log() {
    let settings = TableSettingsBuilder::default()
        .kind(TableKind::List)
        .verbose(true)
        .build()
        .unwrap();
    let mut session = TableSession::new(settings).unwrap();
    session.print_to_buffer();

    assert!(session.put(1, 10).unwrap());
    assert!(!session.put(1, 11).unwrap());
    assert_eq!(session.get(1).unwrap(), 11);
    assert!(matches!(
        session.get(2),
        Err(SessionError::Operation(TableError::KeyNotFound(2)))
    ));
    assert!(session.delete(1).unwrap());
    assert!(!session.delete(1).unwrap());

    assert_eq!(
        session.get_print_buffer().unwrap(),
        "put(1, 10): inserted\n\
         put(1, 11): updated\n\
         get(1): 11\n\
         get(2): Key 2 not found\n\
         delete(1): deleted\n\
         delete(1): absent\n"
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
fn test_table_session_log_failure() {
    let settings = TableSettingsBuilder::default().verbose(true).build().unwrap();
    let mut session = TableSession::new(settings).unwrap();
    session.print_to_stream(Box::new(BrokenStream));

    // the table changes even though the log line is lost
    let err = session.put(1, 10).unwrap_err();
    assert!(matches!(err, SessionError::Log { outcome: true, .. }));
    assert_eq!(session.size(), 1);

    assert_eq!(session.put(1, 11).unwrap_err().outcome(), Some(false));
    assert_eq!(session.delete(1).unwrap_err().outcome(), Some(true));
    assert_eq!(session.delete(1).unwrap_err().outcome(), Some(false));
    assert_eq!(session.size(), 0);

    // lookups have no outcome to preserve
    assert!(matches!(session.get(1), Err(SessionError::Io(_))));
    assert_eq!(session.get(1).unwrap_err().outcome(), None);
}

#[test]
fn test_table_session_bad_settings() {
    let settings = TableSettings {
        hash_buckets: 0,
        ..TableSettings::default()
    };
    assert!(TableSession::new(settings).is_err());
}
