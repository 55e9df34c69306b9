//! 文本字段守卫
//!
//! 对用户提交的文本字段做统一筛查：长度、单行约束、注入特征

/// 默认最大字符数（Unicode 标量计数）
pub const DEFAULT_MAX_CHARS: usize = 255;

/// 文本筛查配置
#[derive(Debug, Clone)]
pub struct GuardConfig {
    /// 最大字符数
    pub max_chars: usize,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

/// 文本筛查失败原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFault {
    /// 空文本
    Empty,
    /// 超出最大长度
    TooLong,
    /// 含控制字符（包括换行，即多行文本）
    ControlCharacter,
    /// 含注入特征（SQL 注释/终结、标签、命令元字符）
    SuspiciousPattern,
}

impl TextFault {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextFault::Empty => "文本为空",
            TextFault::TooLong => "超出最大长度",
            TextFault::ControlCharacter => "含控制字符",
            TextFault::SuspiciousPattern => "含注入特征",
        }
    }
}

/// 注入特征子串（SQL 注释与块注释、子命令、命令拼接）
const SUSPICIOUS_SUBSTRINGS: &[&str] = &["--", "/*", "*/", "$(", "&&"];

/// 单字符元字符（语句终结、管道、标签、反引号）
#[inline]
fn is_meta_char(ch: char) -> bool {
    matches!(ch, ';' | '|' | '<' | '>' | '`')
}

/// 筛查单个文本字段
///
/// 规则:
/// 1. 非空
/// 2. 字符数不超过 `max_chars`
/// 3. 不含控制字符（单行约束由此覆盖）
/// 4. 不含注入特征
pub fn screen_text(text: &str, config: &GuardConfig) -> Result<(), TextFault> {
    if text.is_empty() {
        return Err(TextFault::Empty);
    }
    if text.chars().count() > config.max_chars {
        return Err(TextFault::TooLong);
    }
    if text.chars().any(char::is_control) {
        return Err(TextFault::ControlCharacter);
    }
    if text.chars().any(is_meta_char) {
        return Err(TextFault::SuspiciousPattern);
    }
    if SUSPICIOUS_SUBSTRINGS.iter().any(|p| text.contains(p)) {
        return Err(TextFault::SuspiciousPattern);
    }
    Ok(())
}
