//! 自然数字排序模块
//!
//! 文件名比较时把连续数字当作数值处理，
//! 保证 file-2 排在 file-10 之前；字母比较大小写不敏感。

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// 大小写不敏感的自然数字比较
pub fn natural_compare(a: &str, b: &str) -> Ordering {
    let mut chars_a = a.chars().peekable();
    let mut chars_b = b.chars().peekable();

    loop {
        match (chars_a.peek().copied(), chars_b.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let run_a = take_digit_run(&mut chars_a);
                    let run_b = take_digit_run(&mut chars_b);
                    let ord = compare_digit_runs(&run_a, &run_b);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                } else {
                    let ord = x.to_lowercase().cmp(y.to_lowercase());
                    if ord != Ordering::Equal {
                        return ord;
                    }
                    chars_a.next();
                    chars_b.next();
                }
            }
        }
    }
}

/// 取出连续的数字串
fn take_digit_run(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

/// 按数值比较两个数字串
///
/// 先去掉前导零再比较长度和字典序，避免把超长数字解析成整数时溢出；
/// 数值相等时前导零少的排前面，保证排序结果稳定
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let trimmed_a = a.trim_start_matches('0');
    let trimmed_b = b.trim_start_matches('0');

    trimmed_a
        .len()
        .cmp(&trimmed_b.len())
        .then_with(|| trimmed_a.cmp(trimmed_b))
        .then_with(|| a.len().cmp(&b.len()))
}
