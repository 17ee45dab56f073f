/// Trial division over `6k ± 1`. Values below 2 are never prime.
pub fn is_prime(value: i32) -> bool {
    if value < 2 {
        return false;
    }
    if value < 4 {
        return true;
    }
    if value % 2 == 0 || value % 3 == 0 {
        return false;
    }

    // Widened so `d * d` cannot overflow near `i32::MAX`.
    let n = i64::from(value);
    let mut d = 5_i64;
    while d * d <= n {
        if n % d == 0 || n % (d + 2) == 0 {
            return false;
        }
        d += 6;
    }
    true
}
