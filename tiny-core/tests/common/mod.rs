//! 测试辅助工具

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use tiny_core::{tokenize, TokenKind};

/// 扫描并返回 (lexeme, kind) 列表
pub fn scan_pairs(source: &str) -> Vec<(String, TokenKind)> {
    tokenize(source)
        .tokens
        .into_iter()
        .map(|t| (t.lexeme, t.kind))
        .collect()
}

/// 确定性的伪随机源（线性同余），用于生成测试输入
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_index(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound
    }

    /// 从字母表中随机取字符拼出字符串
    pub fn string_from(&mut self, alphabet: &[char], len: usize) -> String {
        (0..len)
            .map(|_| alphabet[self.next_index(alphabet.len())])
            .collect()
    }
}

/// 把 `pred` 成立的最大连续片段切出来
pub fn maximal_runs(source: &str, pred: impl Fn(char) -> bool) -> Vec<String> {
    let mut runs = Vec::new();
    let mut current = String::new();
    for c in source.chars() {
        if pred(c) {
            current.push(c);
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// 捕获 tracing 输出的内存 writer
#[derive(Clone, Default)]
pub struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl CaptureWriter {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut inner) = self.0.lock() {
            inner.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
