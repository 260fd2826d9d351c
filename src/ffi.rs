//! C ABI surface.
//!
//! Mirrors the crate's arithmetic as C-callable functions returning a
//! flag-carrying result struct, for consumers linking the cdylib or
//! staticlib build. Callers must check `invalid` before reading `answer`;
//! when `invalid` is set, `answer` is zeroed and carries no meaning.

use crate::{safe_add, safe_add64, safe_sub, safe_sub64, ArithError};

#[repr(C)]
pub struct Result32 {
    pub answer: u32,
    pub invalid: bool,
}

impl From<Result<u32, ArithError>> for Result32 {
    fn from(res: Result<u32, ArithError>) -> Self {
        match res {
            Ok(answer) => Self { answer, invalid: false },
            Err(_) => Self { answer: 0, invalid: true },
        }
    }
}

#[repr(C)]
pub struct Result64 {
    pub answer: u64,
    pub invalid: bool,
}

impl From<Result<u64, ArithError>> for Result64 {
    fn from(res: Result<u64, ArithError>) -> Self {
        match res {
            Ok(answer) => Self { answer, invalid: false },
            Err(_) => Self { answer: 0, invalid: true },
        }
    }
}

#[no_mangle]
pub extern "C" fn add_safe(x: u32, y: u32) -> Result32 {
    safe_add(x, y).into()
}

#[no_mangle]
pub extern "C" fn sub_safe(x: u32, y: u32) -> Result32 {
    safe_sub(x, y).into()
}

#[no_mangle]
pub extern "C" fn add_safe64(x: u64, y: u64) -> Result64 {
    safe_add64(x, y).into()
}

#[no_mangle]
pub extern "C" fn sub_safe64(x: u64, y: u64) -> Result64 {
    safe_sub64(x, y).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn add_safe_valid_case() {
        let res = add_safe(2, 3);
        assert!(!res.invalid);
        assert_eq!(res.answer, 5);
    }

    #[test]
    fn add_safe_overflow_case() {
        let res = add_safe(1, u32::MAX);
        assert!(res.invalid);
        assert_eq!(res.answer, 0);
    }

    #[test]
    fn sub_safe_underflow_case() {
        let res = sub_safe(2, 3);
        assert!(res.invalid);
    }

    proptest! {
        // the C surface must agree field-for-field with the core functions
        #[test]
        fn add_safe_agrees_with_core(x: u32, y: u32) {
            let res = add_safe(x, y);
            match safe_add(x, y) {
                Ok(sum) => {
                    prop_assert!(!res.invalid);
                    prop_assert_eq!(res.answer, sum);
                }
                Err(_) => prop_assert!(res.invalid),
            }
        }

        #[test]
        fn sub_safe_agrees_with_core(x: u32, y: u32) {
            let res = sub_safe(x, y);
            match safe_sub(x, y) {
                Ok(diff) => {
                    prop_assert!(!res.invalid);
                    prop_assert_eq!(res.answer, diff);
                }
                Err(_) => prop_assert!(res.invalid),
            }
        }

        #[test]
        fn wide_surface_agrees_with_core(x: u64, y: u64) {
            let add = add_safe64(x, y);
            prop_assert_eq!(add.invalid, safe_add64(x, y).is_err());
            let sub = sub_safe64(x, y);
            prop_assert_eq!(sub.invalid, safe_sub64(x, y).is_err());
        }
    }
}
