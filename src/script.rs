use crate::column_type::ColumnType;
use crate::config::Config;
use crate::ident;
use crate::key::SortKey;
use crate::order::Order;

pub(crate) const TABLE: &str = "data";
pub(crate) const INDEX: &str = "data_idx";

const DEFAULT_DELIMITER: char = ',';

/// Generate the script submitted to the sqlite3 standard input.
///
/// The command order is significant: optional table creation, csv mode,
/// import separator, import, optional index, export separator, header and
/// output redirection, the query, quit. The text is a pure function of the
/// configuration - the same configuration always yields the same bytes.
pub(crate) fn generate(config: &Config) -> String {
    let mut script = String::new();

    if !config.schema().is_empty() {
        let columns = config
            .schema()
            .iter()
            .map(|column| {
                let token = match column.column_type() {
                    ColumnType::String => "TEXT",
                    ColumnType::Number => "NUMERIC",
                };
                format!("{} {}", ident::quote(column.name()), token)
            })
            .collect::<Vec<String>>()
            .join(", ");
        script.push_str(&format!("create table {} ({});\n", TABLE, columns));
    }

    script.push_str(".mode csv\n");

    if config.input_delimiter() != DEFAULT_DELIMITER {
        script.push_str(&format!(
            ".separator \"{}\"\n",
            escape_delimiter(config.input_delimiter())
        ));
    }

    if config.schema().is_empty() {
        // the header line supplies the column names
        script.push_str(&format!(
            ".import '{}' {}\n",
            config.input().to_string_lossy(),
            TABLE
        ));
    } else {
        // the table already defines names and types, skip the header line
        script.push_str(&format!(
            ".import --skip 1 '{}' {}\n",
            config.input().to_string_lossy(),
            TABLE
        ));
    }

    if config.build_index() {
        let columns = config
            .keys()
            .iter()
            .map(|key| ident::quote(key.name()))
            .collect::<Vec<String>>()
            .join(", ");
        script.push_str(&format!(
            "create index {} on {} ({});\n",
            INDEX, TABLE, columns
        ));
    }

    if config.output_delimiter() != DEFAULT_DELIMITER {
        script.push_str(&format!(
            ".separator \"{}\"\n",
            escape_delimiter(config.output_delimiter())
        ));
    } else if config.input_delimiter() != DEFAULT_DELIMITER {
        // restore the default so the import separator never leaks into the export
        script.push_str(".separator \",\"\n");
    }

    script.push_str(".headers on\n");
    script.push_str(&format!(
        ".output '{}'\n",
        config.output().to_string_lossy()
    ));
    script.push_str(&format!("{};\n", query(config)));
    script.push_str(".quit\n");
    script
}

fn query(config: &Config) -> String {
    let columns = if config.select().is_empty() {
        "*".to_string()
    } else {
        config
            .select()
            .iter()
            .map(|name| ident::quote(name))
            .collect::<Vec<String>>()
            .join(", ")
    };

    let mut statement = format!("select {} from {}", columns, TABLE);
    if let Some(filter) = config.filter() {
        statement.push_str(&format!(" where {}", filter));
    }
    let keys = config
        .keys()
        .iter()
        .map(order_term)
        .collect::<Vec<String>>()
        .join(", ");
    statement.push_str(&format!(" order by {}", keys));
    if let Some(limit) = config.limit() {
        statement.push_str(&format!(" limit {}", limit));
    }
    if let Some(offset) = config.offset() {
        statement.push_str(&format!(" offset {}", offset));
    }
    statement
}

fn order_term(key: &SortKey) -> String {
    match key.order() {
        Order::Asc => ident::quote(key.name()),
        Order::Desc => format!("{} DESC", ident::quote(key.name())),
    }
}

fn escape_delimiter(delimiter: char) -> String {
    if delimiter == '\t' {
        "\\t".to_string()
    } else {
        delimiter.to_string()
    }
}
