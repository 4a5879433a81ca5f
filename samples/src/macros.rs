/// Construct a [Samples][crate::buf::Samples] container.
///
/// This works like [vec!] and is mostly useful when testing.
///
/// # Examples
///
/// ```
/// let buf = samples::samples![0i16; 64];
///
/// assert_eq!(buf.len(), 64);
/// assert!(buf.iter().all(|s| *s == 0));
/// ```
///
/// Listing each sample.
///
/// ```
/// use samples::MuLaw;
///
/// let buf = samples::samples![MuLaw(0xff), MuLaw(0x80)];
///
/// assert_eq!(buf.as_slice(), &[MuLaw(0xff), MuLaw(0x80)]);
/// ```
///
/// Without any samples the encoding has to be inferred.
///
/// ```
/// let buf: samples::buf::Samples<f32> = samples::samples![];
///
/// assert!(buf.is_empty());
/// ```
#[macro_export]
macro_rules! samples {
    () => {
        $crate::buf::Samples::new()
    };

    ($sample:expr; $len:expr) => {
        $crate::buf::Samples::from_vec(::std::vec![$sample; $len])
    };

    ($($sample:expr),+ $(,)?) => {
        $crate::buf::Samples::from_vec(::std::vec![$($sample),+])
    };
}
