//! # 문자열 유틸리티
//!
//! 로그 출력 시 개인정보를 가리는 문자열 유틸리티입니다.

/// 로그 출력용 이메일 마스킹
///
/// 로컬 파트의 첫 글자만 남기고 나머지를 `*`로 가립니다.
/// `@`가 없는 값은 전체를 가립니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(mask_email("alice@example.com"), "a****@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let mut chars = local.chars();
            match chars.next() {
                Some(first) => format!("{}{}@{}", first, "*".repeat(chars.count()), domain),
                None => format!("@{}", domain),
            }
        }
        None => "*".repeat(email.chars().count()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("alice@example.com"), "a****@example.com");
        assert_eq!(mask_email("a@b.com"), "a@b.com");
        assert_eq!(mask_email("@b.com"), "@b.com");
        assert_eq!(mask_email("nope"), "****");
    }
}
