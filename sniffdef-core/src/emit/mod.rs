//! Ingestion-definition rendering.
//!
//! One block per schema and binding:
//!
//! ```text
//! DEFINE LAZY tcp AS
//!   READ FROM
//!     FILES "/data/tcp_v30.*csv"
//!       THEN DELETE
//!     AS CSV
//!       SEPARATOR "\t"
//!       NULL "\\N"
//!       NO QUOTES
//!       ESCAPE WITH "\\"
//!     (poller string,                     -- 1
//!      capture_begin u64,
//!      ...
//!      dcerpc_uuid string?)
//!   EVENT STARTING AT capture_begin * 1e-6
//!     AND STOPPING AT capture_end * 1e-6;
//! ```
//!
//! Rendering is a pure function of its inputs: the same schema and binding
//! always produce the same bytes.

mod ident;
mod window;

use std::borrow::Borrow;
use std::collections::HashMap;

pub use ident::{is_plain_identifier, quote_identifier, quote_string};
pub use window::window_clause;

use crate::error::{Error, Result};
use crate::protocol::definition_name;
use crate::schema::{Encoding, FieldDescriptor, ProtocolSchema, SchemaKey};
use crate::transport::{BusBinding, FileBinding, SourceBinding, DECOMPRESSOR};

/// Column where ordinal comments start.
const COMMENT_COLUMN: usize = 40;

/// Every N-th field gets an ordinal comment (plus the first).
const COMMENT_EVERY: usize = 10;

/// Modeline written at the top of every program.
pub const PROGRAM_HEADER: &str = "-- vim: ft=sql expandtab";

/// Names of the program parameters driving a file source.
struct FileParameters {
    prefix: &'static str,
    compressed: &'static str,
    delete: &'static str,
}

impl FileParameters {
    /// `csv_*` for CSV sources, `files_*` for row-binary ones.
    const fn for_encoding(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Csv => Self {
                prefix: "csv_prefix",
                compressed: "csv_compressed",
                delete: "csv_delete",
            },
            Encoding::RowBinary => Self {
                prefix: "files_prefix",
                compressed: "files_compressed",
                delete: "files_delete",
            },
        }
    }
}

const KAFKA_BROKER_LIST: &str = "kafka_broker_list";
const KAFKA_MAX_MSG_SIZE: &str = "kafka_max_msg_size";

/// How source clauses carry transport options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceStyle {
    /// Literal values inlined in every block
    #[default]
    Resolved,
    /// Blocks reference program `PARAMETERS`, overridable at deploy time
    Parameterized,
}

/// A rendered definition block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionDefinition {
    key: SchemaKey,
    name: &'static str,
    binding: SourceBinding,
    text: String,
}

impl IngestionDefinition {
    pub fn key(&self) -> &SchemaKey {
        &self.key
    }

    /// Unquoted definition name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn binding(&self) -> &SourceBinding {
        &self.binding
    }

    /// Block text, terminated by `;` without a trailing newline.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for IngestionDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Stateless definition renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Emitter {
    style: SourceStyle,
}

impl Emitter {
    pub fn new(style: SourceStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> SourceStyle {
        self.style
    }

    /// Render one definition block.
    pub fn emit(&self, schema: &ProtocolSchema, binding: &SourceBinding) -> IngestionDefinition {
        let name = definition_name(schema.protocol(), schema.encoding());

        let mut lines = vec![
            format!("DEFINE LAZY {} AS", quote_identifier(name)),
            "  READ FROM".to_string(),
        ];
        match binding {
            SourceBinding::File(file) => self.file_clause(file, schema.encoding(), &mut lines),
            SourceBinding::Bus(bus) => self.bus_clause(bus, &mut lines),
        }
        encoding_clause(schema.encoding(), &mut lines);
        field_list(schema.fields(), &mut lines);
        lines.extend(window_clause().lines().map(|line| format!("  {line}")));

        let mut text = lines.join("\n");
        text.push(';');

        IngestionDefinition {
            key: schema.key().clone(),
            name,
            binding: binding.clone(),
            text,
        }
    }

    /// Render a batch, failing if two items share a definition name.
    pub fn emit_all<S, I>(&self, items: I) -> Result<Vec<IngestionDefinition>>
    where
        S: Borrow<ProtocolSchema>,
        I: IntoIterator<Item = (S, SourceBinding)>,
    {
        let mut seen: HashMap<&'static str, SchemaKey> = HashMap::new();
        let mut definitions = Vec::new();

        for (schema, binding) in items {
            let definition = self.emit(schema.borrow(), &binding);
            if let Some(first) = seen.get(definition.name) {
                return Err(Error::DuplicateDefinitionName {
                    name: definition.name.to_string(),
                    first: first.clone(),
                    second: definition.key.clone(),
                });
            }
            seen.insert(definition.name, definition.key.clone());
            definitions.push(definition);
        }

        Ok(definitions)
    }

    /// Assemble definitions into a complete program.
    ///
    /// In parameterized style the `PARAMETERS` defaults are taken from the
    /// first binding of each transport kind. File sources get `csv_*` or
    /// `files_*` parameters depending on their encoding.
    pub fn render_program(&self, definitions: &[IngestionDefinition]) -> String {
        let mut sections = vec![PROGRAM_HEADER.to_string()];

        if self.style == SourceStyle::Parameterized {
            if let Some(parameters) = parameters_block(definitions) {
                sections.push(parameters);
            }
        }
        sections.extend(definitions.iter().map(|d| d.text.clone()));

        let mut program = sections.join("\n\n");
        program.push('\n');
        program
    }

    fn file_clause(&self, file: &FileBinding, encoding: Encoding, lines: &mut Vec<String>) {
        match self.style {
            SourceStyle::Resolved => {
                lines.push(format!("    FILES {}", quote_string(&file.glob())));
                if let Some(command) = file.preprocessor() {
                    lines.push(format!("      PREPROCESSED WITH {}", quote_string(command)));
                }
                if file.delete {
                    lines.push("      THEN DELETE".to_string());
                }
            }
            SourceStyle::Parameterized => {
                let params = FileParameters::for_encoding(encoding);
                lines.push(format!(
                    "    FILES {} || {} || (IF {} THEN \".lz4\" ELSE \"\")",
                    params.prefix,
                    quote_string(&file.pattern),
                    params.compressed
                ));
                lines.push(format!(
                    "      PREPROCESSED WITH (IF {} THEN {} ELSE \"\")",
                    params.compressed,
                    quote_string(DECOMPRESSOR)
                ));
                lines.push(format!("      THEN DELETE IF {}", params.delete));
            }
        }
    }

    fn bus_clause(&self, bus: &BusBinding, lines: &mut Vec<String>) {
        let (broker, max_size) = match self.style {
            SourceStyle::Resolved => (
                quote_string(&bus.broker),
                bus.max_message_size.map(|n| quote_string(&n.to_string())),
            ),
            SourceStyle::Parameterized => (
                KAFKA_BROKER_LIST.to_string(),
                bus.max_message_size.map(|_| KAFKA_MAX_MSG_SIZE.to_string()),
            ),
        };

        lines.push(format!("    KAFKA TOPIC {}", quote_string(&bus.topic())));
        lines.push("    WITH OPTIONS".to_string());
        match max_size {
            Some(max_size) => {
                lines.push(format!("      \"metadata.broker.list\" = {broker},"));
                lines.push(format!("      \"max.partition.fetch.bytes\" = {max_size}"));
            }
            None => lines.push(format!("      \"metadata.broker.list\" = {broker}")),
        }
    }
}

/// Render a single block with literal transport values.
pub fn emit(schema: &ProtocolSchema, binding: &SourceBinding) -> IngestionDefinition {
    Emitter::default().emit(schema, binding)
}

fn encoding_clause(encoding: Encoding, lines: &mut Vec<String>) {
    match encoding {
        Encoding::Csv => lines.extend(
            [
                "    AS CSV",
                "      SEPARATOR \"\\t\"",
                "      NULL \"\\\\N\"",
                "      NO QUOTES",
                "      ESCAPE WITH \"\\\\\"",
            ]
            .map(String::from),
        ),
        Encoding::RowBinary => lines.push("    AS ROWBINARY".to_string()),
    }
}

fn field_list(fields: &[FieldDescriptor], lines: &mut Vec<String>) {
    let last = fields.len().saturating_sub(1);

    for (idx, field) in fields.iter().enumerate() {
        let open = if idx == 0 { "    (" } else { "     " };
        let close = if idx == last { ")" } else { "," };
        let mut line = format!("{open}{field}{close}");

        let ordinal = idx + 1;
        if ordinal == 1 || ordinal % COMMENT_EVERY == 0 {
            let pad = COMMENT_COLUMN.saturating_sub(line.len()).max(1);
            line.push_str(&" ".repeat(pad));
            line.push_str(&format!("-- {ordinal}"));
        }
        lines.push(line);
    }
}

fn parameters_block(definitions: &[IngestionDefinition]) -> Option<String> {
    let bus = definitions.iter().find_map(|d| match &d.binding {
        SourceBinding::Bus(bus) => Some(bus),
        SourceBinding::File(_) => None,
    });

    let mut params = Vec::new();
    for encoding in Encoding::ALL {
        let file = definitions.iter().find_map(|d| match &d.binding {
            SourceBinding::File(file) if d.key.encoding == encoding => Some(file),
            _ => None,
        });
        if let Some(file) = file {
            let names = FileParameters::for_encoding(encoding);
            params.push(format!("{} DEFAULTS TO {}", names.prefix, quote_string(&file.prefix)));
            params.push(format!("{} DEFAULTS TO {}", names.compressed, file.compressed));
            params.push(format!("{} DEFAULTS TO {}", names.delete, file.delete));
        }
    }
    if let Some(bus) = bus {
        params.push(format!("{KAFKA_BROKER_LIST} DEFAULTS TO {}", quote_string(&bus.broker)));
        if let Some(max_size) = bus.max_message_size {
            params.push(format!(
                "{KAFKA_MAX_MSG_SIZE} DEFAULTS TO {}",
                quote_string(&max_size.to_string())
            ));
        }
    }

    if params.is_empty() {
        return None;
    }
    Some(format!("PARAMETERS\n  {};", params.join(",\n  ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{default_registry, Protocol};
    use crate::schema::{DataKind, SchemaVersion};
    use crate::transport::{bind, TransportKind, TransportOptions};

    fn schema(protocol: Protocol, encoding: Encoding) -> std::sync::Arc<ProtocolSchema> {
        default_registry()
            .schema_for(protocol, &SchemaVersion::V30, encoding)
            .unwrap()
    }

    fn file_options(prefix: &str, compressed: bool, delete: bool) -> TransportOptions {
        let mut options = TransportOptions::default();
        options.files.prefix = prefix.to_string();
        options.files.compressed = compressed;
        options.files.delete = delete;
        options
    }

    #[test]
    fn test_tcp_file_block() {
        let schema = schema(Protocol::Tcp, Encoding::Csv);
        let binding = bind(
            TransportKind::File,
            schema.key(),
            &file_options("/data/", false, true),
        );
        let text = emit(&schema, &binding).text().to_string();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "DEFINE LAZY tcp AS");
        assert_eq!(lines[1], "  READ FROM");
        assert_eq!(lines[2], "    FILES \"/data/tcp_v30.*csv\"");
        assert_eq!(lines[3], "      THEN DELETE");
        assert_eq!(lines[4], "    AS CSV");
        assert_eq!(lines[5], "      SEPARATOR \"\\t\"");
        assert_eq!(lines[6], "      NULL \"\\\\N\"");
        assert_eq!(lines[7], "      NO QUOTES");
        assert_eq!(lines[8], "      ESCAPE WITH \"\\\\\"");
        assert_eq!(lines[9], "    (poller string,                     -- 1");
        assert_eq!(lines[10], "     capture_begin u64,");
        assert_eq!(lines[18], "     mac_client u64?,                   -- 10");
        assert!(!text.contains("PREPROCESSED"));
        assert!(text.ends_with(
            "dcerpc_uuid string?)\n  EVENT STARTING AT capture_begin * 1e-6\n    AND STOPPING AT capture_end * 1e-6;"
        ));
    }

    #[test]
    fn test_bus_block() {
        let schema = schema(Protocol::OtherIp, Encoding::RowBinary);
        let mut options = TransportOptions::default();
        options.bus.broker = "broker:9092".to_string();
        let binding = bind(TransportKind::Bus, schema.key(), &options);

        let definition = emit(&schema, &binding);
        assert_eq!(definition.name(), "other-ip_ext");
        let text = definition.text();
        assert!(text.starts_with(
            "DEFINE LAZY 'other-ip_ext' AS\n  READ FROM\n    KAFKA TOPIC \"pvx.chb.other_ip\"\n    WITH OPTIONS\n      \"metadata.broker.list\" = \"broker:9092\",\n      \"max.partition.fetch.bytes\" = \"1000000\"\n    AS ROWBINARY\n    (poller string,"
        ));
        assert!(!text.contains("FILES"));
        assert!(!text.contains("AS CSV"));

        options.bus.max_message_size = None;
        let binding = bind(TransportKind::Bus, schema.key(), &options);
        let text = emit(&schema, &binding).text().to_string();
        assert!(text.contains("WITH OPTIONS\n      \"metadata.broker.list\" = \"broker:9092\"\n    AS ROWBINARY"));
    }

    #[test]
    fn test_long_field_comment_keeps_a_space() {
        let key = SchemaKey::new(Protocol::Tcp, SchemaVersion::V30, Encoding::Csv);
        let schema = ProtocolSchema::new(
            key,
            vec![
                FieldDescriptor::new("a_really_long_field_name_for_testing", DataKind::String),
                FieldDescriptor::capture_timestamp("capture_begin"),
                FieldDescriptor::capture_timestamp("capture_end"),
            ],
        )
        .unwrap();
        let binding = bind(TransportKind::File, schema.key(), &TransportOptions::default());
        let text = emit(&schema, &binding).text().to_string();
        assert!(text.contains("    (a_really_long_field_name_for_testing string, -- 1\n"));
        assert!(text.contains("     capture_end u64)\n"));
    }

    #[test]
    fn test_parameterized_file_block() {
        let schema = schema(Protocol::Sql, Encoding::RowBinary);
        let binding = bind(TransportKind::File, schema.key(), &TransportOptions::default());
        let text = Emitter::new(SourceStyle::Parameterized)
            .emit(&schema, &binding)
            .text()
            .to_string();

        assert!(text.starts_with(
            "DEFINE LAZY sql_ext AS\n  READ FROM\n    FILES files_prefix || \"databases_*v30.*chb\" || (IF files_compressed THEN \".lz4\" ELSE \"\")\n      PREPROCESSED WITH (IF files_compressed THEN \"lz4 -d -c\" ELSE \"\")\n      THEN DELETE IF files_delete\n    AS ROWBINARY\n"
        ));
    }

    #[test]
    fn test_parameterized_csv_file_names() {
        let emitter = Emitter::new(SourceStyle::Parameterized);
        let options = file_options("/data/", true, false);
        let items = [Protocol::Tcp, Protocol::Udp].map(|p| {
            let schema = schema(p, Encoding::Csv);
            let binding = bind(TransportKind::File, schema.key(), &options);
            (schema, binding)
        });
        let definitions = emitter.emit_all(items).unwrap();

        assert!(definitions[0].text().starts_with(
            "DEFINE LAZY tcp AS\n  READ FROM\n    FILES csv_prefix || \"tcp_v30.*csv\" || (IF csv_compressed THEN \".lz4\" ELSE \"\")\n      PREPROCESSED WITH (IF csv_compressed THEN \"lz4 -d -c\" ELSE \"\")\n      THEN DELETE IF csv_delete\n    AS CSV\n"
        ));

        let program = emitter.render_program(&definitions);
        assert!(program.starts_with(
            "-- vim: ft=sql expandtab\n\nPARAMETERS\n  csv_prefix DEFAULTS TO \"/data/\",\n  csv_compressed DEFAULTS TO true,\n  csv_delete DEFAULTS TO false;\n\n"
        ));
        assert!(!program.contains("files_"));
    }

    #[test]
    fn test_mixed_encodings_declare_both_file_parameter_sets() {
        let emitter = Emitter::new(SourceStyle::Parameterized);
        let options = TransportOptions::default();
        let items = [Encoding::Csv, Encoding::RowBinary].map(|encoding| {
            let schema = schema(Protocol::Dns, encoding);
            let binding = bind(TransportKind::File, schema.key(), &options);
            (schema, binding)
        });
        let definitions = emitter.emit_all(items).unwrap();
        let program = emitter.render_program(&definitions);

        assert!(program.contains("  csv_delete DEFAULTS TO true,\n  files_prefix DEFAULTS TO"));
        assert!(definitions[1].text().contains("THEN DELETE IF files_delete\n"));
    }

    #[test]
    fn test_control_characters_in_options_are_escaped() {
        let schema = schema(Protocol::Tcp, Encoding::Csv);
        let baseline = emit(
            &schema,
            &bind(TransportKind::File, schema.key(), &TransportOptions::default()),
        );

        let mut options = TransportOptions::default();
        options.files.prefix = "/data/\nTHEN DELETE\t".to_string();
        let definition = emit(&schema, &bind(TransportKind::File, schema.key(), &options));
        assert_eq!(definition.text().lines().count(), baseline.text().lines().count());
        assert!(definition
            .text()
            .contains("    FILES \"/data/\\nTHEN DELETE\\ttcp_v30.*csv\"\n"));
    }

    #[test]
    fn test_parameterized_program() {
        let emitter = Emitter::new(SourceStyle::Parameterized);
        let options = TransportOptions::default();
        let items = [Protocol::Tcp, Protocol::Udp].map(|p| {
            let schema = schema(p, Encoding::Csv);
            let binding = bind(TransportKind::Bus, schema.key(), &options);
            (schema, binding)
        });
        let definitions = emitter.emit_all(items).unwrap();
        let program = emitter.render_program(&definitions);

        assert!(program.starts_with(
            "-- vim: ft=sql expandtab\n\nPARAMETERS\n  kafka_broker_list DEFAULTS TO \"localhost:9092\",\n  kafka_max_msg_size DEFAULTS TO \"1000000\";\n\nDEFINE LAZY tcp AS\n"
        ));
        assert!(program.contains("\"metadata.broker.list\" = kafka_broker_list,"));
        assert!(program.contains(";\n\nDEFINE LAZY udp AS\n"));
        assert!(program.ends_with("1e-6;\n"));
    }

    #[test]
    fn test_resolved_program_has_no_parameters() {
        let emitter = Emitter::default();
        let schema = schema(Protocol::Dns, Encoding::Csv);
        let binding = bind(TransportKind::File, schema.key(), &TransportOptions::default());
        let definitions = emitter.emit_all([(schema, binding)]).unwrap();
        let program = emitter.render_program(&definitions);

        assert!(program.starts_with("-- vim: ft=sql expandtab\n\nDEFINE LAZY dns AS\n"));
        assert!(!program.contains("PARAMETERS"));
    }

    #[test]
    fn test_duplicate_definition_name() {
        let mut registry = default_registry();
        let v29 = SchemaVersion::new("v29").unwrap();
        registry
            .register(
                SchemaKey::new(Protocol::Tcp, v29.clone(), Encoding::Csv),
                Protocol::Tcp.v30_fields(),
            )
            .unwrap();

        let options = TransportOptions::default();
        let items = [SchemaVersion::V30, v29].map(|version| {
            let schema = registry
                .schema_for(Protocol::Tcp, &version, Encoding::Csv)
                .unwrap();
            let binding = bind(TransportKind::File, schema.key(), &options);
            (schema, binding)
        });

        let err = Emitter::default().emit_all(items).unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateDefinitionName { ref name, .. } if name == "tcp"
        ));
    }
}
