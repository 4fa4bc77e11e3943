//! 题目合并脚本
//!
//! 把两个题目 JSON 文件按顺序合并成一个，id 重新从 1 编号。
//!
//! 用法: merge_questions <输入文件1> <输入文件2> <输出文件>
//! 示例: merge_questions public/Physics-P1.json public/Physics-P2.json public/Physics-Combined.json

use anyhow::Result;
use question_file_service::merge::{load_question_array, merge_question_sets, write_question_array};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.len() < 3 {
        println!("用法: merge_questions <输入文件1> <输入文件2> <输出文件>");
        return ExitCode::FAILURE;
    }

    match run(&args[0], &args[1], &args[2]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("合并失败: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(first_path: &str, second_path: &str, output_path: &str) -> Result<()> {
    // 两个输入都校验通过后才会写输出文件
    let first = load_question_array(Path::new(first_path))?;
    let second = load_question_array(Path::new(second_path))?;

    let (first_count, second_count) = (first.len(), second.len());
    let merged = merge_question_sets(first, second);

    write_question_array(Path::new(output_path), &merged)?;

    println!("✓ 成功合并 {} + {} 个题目", first_count, second_count);
    println!("已生成 {}，共 {} 个题目", output_path, merged.len());

    Ok(())
}
