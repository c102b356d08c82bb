//! `ztgate features` – show what the extractor sees in a URL.

use anyhow::Result;
use ztgate_core::features;
use ztgate_core::scoring::heuristic_score;

pub fn run_features(url: &str) -> Result<()> {
    let f = features::extract(url);
    let h = heuristic_score(&f);

    println!("length            {}", f.length);
    println!("host_length       {}", f.host_length);
    println!("dot_count         {}", f.dot_count);
    println!("slash_count       {}", f.slash_count);
    println!("has_ip            {}", f.has_ip);
    println!("contains_at       {}", f.contains_at);
    println!("contains_percent  {}", f.contains_percent);
    println!("hostname_entropy  {:.4}", f.hostname_entropy);
    println!("suspicious_tld    {}", f.suspicious_tld);
    println!("has_https         {}", f.has_https);
    println!("vector            {:?}", f.to_vector().as_slice());
    println!("heuristic_score   {:.2}", h.score);
    println!("heuristic_reason  {}", h.reason);
    Ok(())
}
