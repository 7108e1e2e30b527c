//! Fuzz target for the layout text parser.
//!
//! Layout files come from operators' disks, so the parser sees:
//! - Unbalanced parentheses and unit braces
//! - `--` comments in odd places
//! - Arbitrary UTF-8 in names and types
//!
//! Anything that parses must also validate or be rejected cleanly, and an
//! accepted layout must render to a definition.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sniffdef_core::schema::layout::parse_layout;
use sniffdef_core::{
    bind, emit, Encoding, Protocol, ProtocolSchema, SchemaKey, SchemaVersion, TransportKind,
    TransportOptions,
};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(fields) = parse_layout(text) else {
        return;
    };

    let key = SchemaKey::new(Protocol::Tcp, SchemaVersion::V30, Encoding::Csv);
    if let Ok(schema) = ProtocolSchema::new(key, fields) {
        let binding = bind(TransportKind::File, schema.key(), &TransportOptions::default());
        let definition = emit(&schema, &binding);
        assert!(definition.text().ends_with(';'));
    }
});
