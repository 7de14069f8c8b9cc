//! 演示如何在 library 模式下使用 dna-toolkit 分析序列。
//!
//! 运行方式：
//! ```bash
//! cargo run --example analyse_sequence
//! ```

use dna_toolkit::analysis;
use dna_toolkit::model::Sequence;
use dna_toolkit::store::MemoryStore;
use dna_toolkit::toolkit::{Toolkit, ToolkitOpt};

fn main() -> anyhow::Result<()> {
    // 1. 校验序列
    let seq = Sequence::parse("atgaaaccctttgggtaaatg")?;
    println!("序列: {}", seq);
    println!("长度: {} nt", seq.len());

    // 2. GC 含量
    let nuc = analysis::analyze_nucleotide(&seq);
    println!("GC 含量: {:.4}", nuc.gc_content);

    // 3. 翻译（TAA 处终止）
    let t = analysis::translate(&seq)?;
    println!("氨基酸序列: {} ({} 个残基)", t.amino_acid_sequence, t.residue_count);
    for (class, n) in &t.composition {
        println!("  {}: {}", class, n);
    }
    for share in &t.top_3_residues {
        println!("  {} {:.2}%", share.residue, share.percentage);
    }

    // 4. 通过服务层入库并汇总
    let mut tk = Toolkit::new(MemoryStore::default(), ToolkitOpt::default());
    let a = tk.create("demo-1", seq.as_str())?;
    let b = tk.create("demo-2", "GGGCCCGGG")?;
    tk.analyse_nucleotide(a.id())?;
    tk.analyse_nucleotide(b.id())?;
    tk.analyse_amino_acid(a.id())?;
    let stats = tk.summary()?;
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}
