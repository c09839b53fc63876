//! Common modular arithmetic for letter-based ciphers
//!
//! Classical ciphers only ever work modulo small numbers (26 for letters), so
//! these helpers favour clarity over speed.

/// Reduce a signed value to its canonical residue in `[0, m)`
///
/// `m` must be non-zero.
pub fn reduce(value: i64, m: u32) -> u32 {
    value.rem_euclid(i64::from(m)) as u32
}

/// Find `a^(-1) mod m` by exhaustive search over `[0, m)`
///
/// Returns `None` when `a` and `m` are not coprime.
pub fn mod_inv(a: u32, m: u32) -> Option<u32> {
    if m == 0 {
        return None;
    }

    let (a, m) = (u64::from(a % m), u64::from(m));
    (0..m)
        .find(|&candidate| (a * candidate) % m == 1 % m)
        .map(|inv| inv as u32)
}

/// Perform modular addition: (a + b) mod m
pub fn mod_add(a: u32, b: u32, m: u32) -> u32 {
    ((u64::from(a % m) + u64::from(b % m)) % u64::from(m)) as u32
}

/// Perform modular subtraction: (a - b) mod m
pub fn mod_sub(a: u32, b: u32, m: u32) -> u32 {
    ((u64::from(a % m) + u64::from(m) - u64::from(b % m)) % u64::from(m)) as u32
}

/// Perform modular multiplication: (a * b) mod m
pub fn mod_mul(a: u32, b: u32, m: u32) -> u32 {
    ((u64::from(a % m) * u64::from(b % m)) % u64::from(m)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_negative() {
        assert_eq!(reduce(-1, 26), 25);
        assert_eq!(reduce(-27, 26), 25);
        assert_eq!(reduce(-11, 26), 15);
        assert_eq!(reduce(52, 26), 0);
        assert_eq!(reduce(i64::MIN, 26), (i64::MIN.rem_euclid(26)) as u32);
    }

    #[test]
    fn test_mod_inv() {
        // 15 * 7 = 105 = 4 * 26 + 1
        assert_eq!(mod_inv(15, 26), Some(7));
        assert_eq!(mod_inv(1, 26), Some(1));
        assert_eq!(mod_inv(25, 26), Some(25));

        // No inverse exists when a shares a factor with m
        assert_eq!(mod_inv(13, 26), None);
        assert_eq!(mod_inv(0, 26), None);
        assert_eq!(mod_inv(4, 26), None);
    }

    #[test]
    fn test_units_mod_26() {
        let units: Vec<u32> = (0..26).filter(|&a| mod_inv(a, 26).is_some()).collect();
        assert_eq!(units, [1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25]);
    }

    #[test]
    fn test_mod_ops() {
        assert_eq!(mod_add(20, 10, 26), 4);
        assert_eq!(mod_sub(3, 10, 26), 19);
        assert_eq!(mod_mul(7, 15, 26), 1);
    }
}
