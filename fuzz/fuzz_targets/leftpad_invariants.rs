use honggfuzz::fuzz;
use left_pad::{leftpad_with, try_leftpad_with};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let Some((&w, rest)) = data.split_first() else {
                return;
            };
            let s = String::from_utf8_lossy(rest);
            let fill = s.chars().next().unwrap_or('#');
            let width = w as usize;

            let out = leftpad_with(s.as_ref(), width, fill);
            assert_eq!(out.chars().count(), s.chars().count().max(width));
            assert!(out.ends_with(s.as_ref()));
            let checked = try_leftpad_with(s.as_ref(), width, fill, Some(255)).unwrap();
            assert_eq!(checked, out);
        });
    }
}
