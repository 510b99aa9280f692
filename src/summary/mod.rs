//! README摘要提取 - 将Markdown文本转换为有长度上限的单行纯文本

use regex::Regex;

/// 摘要最大字符数的默认值
pub const DEFAULT_MAX_LENGTH: usize = 320;

/// 截断摘要时追加的省略号
const ELLIPSIS: char = '…';

/// README摘要提取器。
/// 剥离Markdown标记后取第一个自然段，并按字符数截断到最大长度。
#[derive(Debug)]
pub struct SummaryExtractor {
    heading_regex: Regex,
    bold_regex: Regex,
    italic_regex: Regex,
    link_regex: Regex,
    inline_code_regex: Regex,
    paragraph_regex: Regex,
    whitespace_regex: Regex,
    max_length: usize,
}

impl Default for SummaryExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryExtractor {
    pub fn new() -> Self {
        Self::with_max_length(DEFAULT_MAX_LENGTH)
    }

    /// 指定摘要最大字符数
    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            heading_regex: Regex::new(r"(?m)^#+\s*.*$").unwrap(),
            bold_regex: Regex::new(r"\*\*([^*]+)\*\*").unwrap(),
            italic_regex: Regex::new(r"\*([^*]+)\*").unwrap(),
            link_regex: Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap(),
            inline_code_regex: Regex::new(r"`[^`]+`").unwrap(),
            paragraph_regex: Regex::new(r"\n\s*\n").unwrap(),
            whitespace_regex: Regex::new(r"\s+").unwrap(),
            max_length,
        }
    }

    /// 提取摘要。对任意输入都返回结果，空输入返回空字符串
    pub fn summarize(&self, raw: &str) -> String {
        let stripped = self.strip_markdown(raw);
        let paragraph = self.first_paragraph(&stripped);
        self.truncate(&paragraph)
    }

    /// 剥离Markdown标记：删除标题行，保留强调与链接的内部文本，丢弃行内代码
    fn strip_markdown(&self, raw: &str) -> String {
        let text = self.heading_regex.replace_all(raw, "");
        let text = self.bold_regex.replace_all(&text, "$1");
        let text = self.italic_regex.replace_all(&text, "$1");
        let text = self.link_regex.replace_all(&text, "$1");
        let text = self.inline_code_regex.replace_all(&text, "");
        text.into_owned()
    }

    /// 在原始段落边界上切分，取第一个非空段落。
    /// 标题删除可能留下空的前导段落，需要跳过；全部为空时返回空字符串。
    fn first_paragraph(&self, stripped: &str) -> String {
        for block in self.paragraph_regex.split(stripped) {
            let collapsed = self.collapse_whitespace(block);
            if !collapsed.is_empty() {
                return collapsed;
            }
        }
        String::new()
    }

    /// 将连续空白（含换行）折叠为单个空格，并去除首尾空白
    fn collapse_whitespace(&self, text: &str) -> String {
        self.whitespace_regex.replace_all(text, " ").trim().to_string()
    }

    /// 按字符数截断到最大长度并追加省略号。
    /// 按字符而非字节切分，多字节字符不会被截断到一半。
    /// 仅当最后一个空格位于最大长度的中点之后时才回退到词边界。
    fn truncate(&self, paragraph: &str) -> String {
        if paragraph.chars().count() <= self.max_length {
            return paragraph.to_string();
        }

        let cut: String = paragraph.chars().take(self.max_length).collect();
        let cut = cut.trim_end();

        let mut result = match cut.rfind(' ') {
            Some(pos) if cut[..pos].chars().count() > self.max_length / 2 => {
                cut[..pos].to_string()
            }
            _ => cut.to_string(),
        };
        result.push(ELLIPSIS);
        result
    }
}
