/// Return n!
pub const fn factorial(n: usize) -> usize {
	let mut out = 1;
	let mut i = 2;
	while i <= n {
		out *= i;
		i += 1;
	}
	out
}

/// Enumerate all permutations of `items` with Heap's algorithm.
/// The first permutation is `items` itself.
pub fn heap_permutations<T: Copy, const N: usize>(items: [T; N]) -> Vec<[T; N]> {
	fn generate<T: Copy, const N: usize>(a: &mut [T; N], size: usize, out: &mut Vec<[T; N]>) {
		if size <= 1 {
			out.push(*a);
			return;
		}

		for i in 0..size {
			generate(a, size - 1, out);

			// Odd sizes always swap the first element, even sizes the i-th
			if size % 2 == 1 {
				a.swap(0, size - 1);
			} else {
				a.swap(i, size - 1);
			}
		}
	}

	let mut a = items;
	let mut out = Vec::with_capacity(factorial(N));
	generate(&mut a, N, &mut out);
	out
}

/// Return true if the permutation can be written with an even number of swaps
pub fn is_even_permutation(perm: &[usize]) -> bool {
	let mut inversions = 0;
	for i in 0..perm.len() {
		for j in (i + 1)..perm.len() {
			if perm[i] > perm[j] {
				inversions += 1;
			}
		}
	}
	inversions % 2 == 0
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn factorials() {
		assert_eq!(factorial(0), 1);
		assert_eq!(factorial(1), 1);
		assert_eq!(factorial(6), 720);
	}

	#[test]
	fn heap_enumerates_every_permutation_once() {
		let perms = heap_permutations([0usize, 1, 2, 3, 4, 5]);
		assert_eq!(perms.len(), 720);
		assert_eq!(perms[0], [0, 1, 2, 3, 4, 5]);
		assert_eq!(perms[719], [1, 0, 3, 2, 5, 4]);

		let distinct: HashSet<_> = perms.iter().collect();
		assert_eq!(distinct.len(), 720);

		let even = perms.iter().filter(|p| is_even_permutation(&p[..])).count();
		assert_eq!(even, 360);
	}

	#[test]
	fn small_heap() {
		let perms = heap_permutations(['a', 'b', 'c']);
		assert_eq!(perms.len(), 6);
		assert_eq!(perms[0], ['a', 'b', 'c']);
		assert_eq!(perms[1], ['b', 'a', 'c']);
	}
}
