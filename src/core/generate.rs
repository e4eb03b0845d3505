/// Options controlling the shape of the emitted `holidays` table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit a frozen, `readonly`-typed table instead of a plain object literal.
    pub readonly: bool,
}

/// File name used in the header comment and as the default output path.
pub fn default_file_name(from_year: i32) -> String {
    format!("holidays-jp-from-{}.ts", from_year)
}

/// Renders the TypeScript module text. Pure; performs no IO.
pub fn generate_ts(entries: &[String], from_year: i32, options: RenderOptions) -> String {
    let table_body = entries
        .iter()
        .map(|entry| format!("  {}", entry))
        .collect::<Vec<_>>()
        .join("\n");

    let (table_open, table_close) = if options.readonly {
        (
            "export const holidays: { readonly [key: string]: string } = Object.freeze({",
            "});",
        )
    } else {
        ("export const holidays: { [key: string]: string } = {", "};")
    };

    let mut out = String::new();
    out.push_str(&format!("// {}\n", default_file_name(from_year)));
    out.push_str(MODULE_DOC);
    out.push_str(TABLE_DOC);
    out.push_str(table_open);
    out.push('\n');
    out.push_str(&table_body);
    out.push('\n');
    out.push_str(table_close);
    out.push('\n');
    out.push_str(HELPERS);
    out
}

const MODULE_DOC: &str = r#"/**
 * @file 日本の祝日データと関連ユーティリティ
 * @module holidays-jp
 */

"#;

const TABLE_DOC: &str = r#"/**
 * 祝日データを格納するオブジェクト。
 * キーは 'YYYY-MM-DD' 形式の日付文字列、値は祝日名。
 * @type { [key: string]: string }
 */
"#;

const HELPERS: &str = r#"
/**
 * Dateオブジェクトまたは日付文字列を 'YYYY-MM-DD' 形式の文字列に変換します。
 * @param {Date | string} date - 変換する日付。
 * @returns {string} 'YYYY-MM-DD' 形式の日付文字列。
 * @throws {Error} 無効な日付が指定された場合。
 */
const toDateString = (date: Date | string): string => {
  if (typeof date === "string") {
    date = new Date(date);
  } else if (!(date instanceof Date)) {
    throw new Error("Invalid date");
  }

  const yyyy = date.getFullYear();
  const mm = (date.getMonth() + 1).toString().padStart(2, "0");
  const dd = date.getDate().toString().padStart(2, "0");
  return [yyyy, mm, dd].join("-");
};

/**
 * 指定された日付が祝日であるかどうかを判定します。
 * @param {Date | string} date - 判定する日付。
 * @returns {boolean} 祝日であれば `true`、そうでなければ `false`。
 */
export const isHoliday = (date: Date | string): boolean => {
  const key = toDateString(date);
  return key in holidays;
};

/**
 * 指定された日付の祝日名を取得します。
 * @param {Date | string} date - 祝日名を取得する日付。
 * @returns {string | null} 祝日名。祝日でない場合は `null`。
 */
export const getHolidayName = (date: Date | string): string | null => {
  const key = toDateString(date);
  return holidays[key] || null;
};
"#;
