pub mod options;

pub use self::options::{ CommandError, ExpireTime, Visibility, EXPIRE_TIMES, VISIBILITY_LABELS };

/// Unvalidated arguments, exactly as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPasteArgs {
    pub visibility: String,
    pub expire: String,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteOptions {
    pub visibility: Visibility,
    pub expire: ExpireTime,
    pub title: Option<String>,
}

/// Splits on whitespace into at most `max` fields; the last field keeps the
/// remainder of the input, inner whitespace included.
fn split_fields(input: &str, max: usize) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut rest = input.trim_start();
    while !rest.is_empty() {
        if fields.len() + 1 == max {
            fields.push(rest);
            break;
        }
        match rest.find(char::is_whitespace) {
            Some(end) => {
                fields.push(&rest[..end]);
                rest = rest[end..].trim_start();
            }
            None => {
                fields.push(rest);
                break;
            }
        }
    }
    fields
}

pub fn split_args(args: &str, default_visibility: &str, default_expire: &str) -> RawPasteArgs {
    let mut raw = RawPasteArgs {
        visibility: default_visibility.to_string(),
        expire: default_expire.to_string(),
        title: None,
    };
    match split_fields(args.trim(), 3).as_slice() {
        [visibility, expire, title] => {
            raw.visibility = visibility.to_string();
            raw.expire = expire.to_string();
            raw.title = Some(title.to_string());
        }
        [visibility, expire] => {
            raw.visibility = visibility.to_string();
            raw.expire = expire.to_string();
        }
        // a lone token is taken verbatim, surrounding whitespace included
        _ if !args.is_empty() => {
            raw.visibility = args.to_string();
        }
        _ => {}
    }
    raw
}

pub fn validate_args(raw: RawPasteArgs) -> Result<PasteOptions, CommandError> {
    // an unknown expire code is reported even when the visibility is also bad
    let expire: ExpireTime = raw.expire.parse()?;
    let visibility: Visibility = raw.visibility.parse()?;
    Ok(PasteOptions {
        visibility,
        expire,
        title: raw.title,
    })
}

pub fn parse_args(
    args: &str,
    default_visibility: &str,
    default_expire: &str
) -> Result<PasteOptions, CommandError> {
    validate_args(split_args(args, default_visibility, default_expire))
}
