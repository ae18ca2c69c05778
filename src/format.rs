// ==========================================
// 工地状态分级库 - 金额格式化
// ==========================================
// 整数卢比,无小数位,印度数字分组 (12,34,567)
// 分级器只提供原始数值,格式化仅供展示层/CLI 使用
// ==========================================

/// 卢比符号
pub const RUPEE: char = '₹';

/// 印度数字分组: 末三位一组,其余每两位一组
pub fn group_indian(whole: u64) -> String {
    let digits = whole.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// 格式化为整数卢比金额
///
/// 四舍五入到整数; 负数前置 "-"; 非有限值输出 "₹—"
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{}—", RUPEE);
    }

    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, RUPEE, group_indian(rounded.abs() as u64))
}

/// 格式化为百分比（整数）
pub fn format_percent(ratio: f64) -> String {
    if !ratio.is_finite() {
        return "0%".to_string();
    }
    format!("{}%", (ratio * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(999), "999");
        assert_eq!(group_indian(1000), "1,000");
        assert_eq!(group_indian(50000), "50,000");
        assert_eq!(group_indian(250000), "2,50,000");
        assert_eq!(group_indian(1000000), "10,00,000");
        assert_eq!(group_indian(123456789), "12,34,56,789");
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(1_000_000.0), "₹10,00,000");
        assert_eq!(format_inr(15000.4), "₹15,000");
        assert_eq!(format_inr(15000.5), "₹15,001");
        assert_eq!(format_inr(-50_000.0), "-₹50,000");
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(f64::NAN), "₹—");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.75), "75%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(f64::INFINITY), "0%");
    }
}
