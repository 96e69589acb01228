//! Post body tokenization for hashtag and mention highlighting

/// One whitespace-delimited piece of a post body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentToken<'a> {
    Text(&'a str),
    /// `#tag`, stored without the leading `#`
    Hashtag(&'a str),
    /// `@handle`, stored without the leading `@`
    Mention(&'a str),
}

/// Split `content` on whitespace and classify each word.
///
/// A bare `#` or `@` stays plain text.
pub fn tokenize(content: &str) -> Vec<ContentToken<'_>> {
    content
        .split_whitespace()
        .map(|word| match (word.strip_prefix('#'), word.strip_prefix('@')) {
            (Some(tag), _) if !tag.is_empty() => ContentToken::Hashtag(tag),
            (_, Some(handle)) if !handle.is_empty() => ContentToken::Mention(handle),
            _ => ContentToken::Text(word),
        })
        .collect()
}

/// Hashtags in order of appearance
pub fn hashtags(content: &str) -> Vec<&str> {
    tokenize(content)
        .into_iter()
        .filter_map(|t| match t {
            ContentToken::Hashtag(tag) => Some(tag),
            _ => None,
        })
        .collect()
}
