//! Parsing from non-string sources.

use std::io::{self, Seek, SeekFrom, Write};

use sapling::{Input, ParseError, ReadInput, StrInput, TextRange, TextSize};

use crate::helpers::grammars::{ARITHMETIC, STATEMENTS};

#[test]
fn test_parse_from_file() {
    let g = &*STATEMENTS;
    let text = "1 + 2;\n30;\n";
    let mut file = tempfile::tempfile().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let mut input = ReadInput::new(file).with_chunk_size(4);
    let tree = g.parser().parse(&mut input).unwrap();
    assert_eq!(tree, g.parse(text));
}

#[test]
fn test_reparse_from_file_seeks_to_resume_point() {
    let g = &*STATEMENTS;
    let old = g.parse("1;2;3;");
    let text = "1;2;33;";
    let mut file = tempfile::tempfile().unwrap();
    file.write_all(text.as_bytes()).unwrap();

    let edit = sapling::InputEdit::replace(TextRange::new(4.into(), 5.into()), TextSize::new(2));
    let mut input = ReadInput::new(file).with_chunk_size(3);
    let tree = g.parser().reparse(&mut input, &old, edit).unwrap();
    assert_eq!(tree, g.parse(text));
    assert!(tree.children()[0].children()[0].ptr_eq(&old.children()[0].children()[0]));
}

/// Serves the first chunk, then fails.
struct BrokenAfterFirstChunk<'a> {
    inner: StrInput<'a>,
    reads: usize,
}

impl Input for BrokenAfterFirstChunk<'_> {
    fn read(&mut self, chunk: &mut Vec<u8>) -> io::Result<()> {
        self.reads += 1;
        if self.reads > 1 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "connection reset"));
        }
        self.inner.read(chunk)
    }

    fn seek(&mut self, position: TextSize) -> io::Result<()> {
        self.inner.seek(position)
    }
}

#[test]
fn test_input_failure_is_reported() {
    let g = &*ARITHMETIC;
    let mut input = BrokenAfterFirstChunk {
        inner: StrInput::new("1+2+3+4").with_chunk_size(3),
        reads: 0,
    };
    let err = g.parser().parse(&mut input).unwrap_err();
    match err {
        ParseError::Input(io) => assert_eq!(io.kind(), io::ErrorKind::UnexpectedEof),
        other => panic!("expected an input error, got {:?}", other),
    }
}
