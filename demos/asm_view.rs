use temporal_splice::{ValueSource, augment};

const MARKER: i32 = -1;

fn main() {}

#[unsafe(no_mangle)]
fn ts_insert_after_0(nums: &[i32]) -> i64 {
    augment::next(nums.iter().copied(), ValueSource::literal(MARKER), |&num| {
        num == 0
    })
    .map(i64::from)
    .sum()
}

#[unsafe(no_mangle)]
fn for_loop_insert_after_0(nums: &[i32]) -> i64 {
    let mut sum = 0_i64;
    let mut pending = true;

    for &num in nums {
        sum += i64::from(num);
        if pending && num == 0 {
            sum += i64::from(MARKER);
            pending = false;
        }
    }

    sum
}

#[unsafe(no_mangle)]
fn ts_append(nums: &[i32]) -> i64 {
    augment::ends_with(nums.iter().copied(), ValueSource::literal(MARKER))
        .map(i64::from)
        .sum()
}

#[unsafe(no_mangle)]
fn chain_append(nums: &[i32]) -> i64 {
    nums.iter()
        .copied()
        .chain(std::iter::once(MARKER))
        .map(i64::from)
        .sum()
}

// `StartsWith` overrides `fold`, so internal iteration should match `chain`.
#[unsafe(no_mangle)]
fn ts_prepend(nums: &[i32]) -> i64 {
    augment::starts_with(nums.iter().copied(), ValueSource::literal(MARKER))
        .map(i64::from)
        .sum()
}

#[unsafe(no_mangle)]
fn chain_prepend(nums: &[i32]) -> i64 {
    std::iter::once(MARKER)
        .chain(nums.iter().copied())
        .map(i64::from)
        .sum()
}
