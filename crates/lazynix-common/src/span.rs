//! Source spans.
//! 源码范围。

use std::fmt;

/// A byte offset into the source text.
/// 源码中的字节偏移。
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BytePos(pub u32);

impl BytePos {
    pub const ZERO: BytePos = BytePos(0);
}

impl fmt::Debug for BytePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BytePos({})", self.0)
    }
}

impl From<usize> for BytePos {
    fn from(pos: usize) -> Self {
        BytePos(pos as u32)
    }
}

impl From<BytePos> for usize {
    fn from(pos: BytePos) -> Self {
        pos.0 as usize
    }
}

/// The half-open byte range `start..end` covered by a token or node.
/// 一个 token 或节点覆盖的半开字节区间。
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// First byte. / 起始字节。
    pub start: BytePos,
    /// One past the last byte. / 结束字节（不包含）。
    pub end: BytePos,
}

impl Span {
    pub const DUMMY: Span = Span {
        start: BytePos::ZERO,
        end: BytePos::ZERO,
    };

    pub fn new(start: BytePos, end: BytePos) -> Self {
        Span { start, end }
    }

    pub fn from_usize(start: usize, end: usize) -> Self {
        Span {
            start: BytePos::from(start),
            end: BytePos::from(end),
        }
    }

    /// The smallest span covering both `self` and `other`.
    /// 同时覆盖 `self` 与 `other` 的最小范围。
    pub fn to(self, other: Span) -> Span {
        Span {
            start: std::cmp::min(self.start, other.start),
            end: std::cmp::max(self.end, other.end),
        }
    }

    pub fn len(&self) -> usize {
        (self.end.0.saturating_sub(self.start.0)) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        usize::from(self.start)..usize::from(self.end)
    }

    /// The text this span covers, or `None` when it does not fall on
    /// character boundaries inside `source`.
    /// 返回此范围覆盖的文本；越界或不在字符边界上时返回 `None`。
    pub fn slice(self, source: &str) -> Option<&str> {
        source.get(self.range())
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.0, self.end.0)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.0, self.end.0)
    }
}
