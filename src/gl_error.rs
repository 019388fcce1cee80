/// Check for OpenGL error and report it using `log::error!`.
///
/// Only active in debug builds!
///
#[macro_export]
macro_rules! check_for_gl_error {
    () => {{
        if cfg!(debug_assertions) {
            $crate::gl_error::check_for_gl_error_impl(file!(), line!(), "")
        }
    }};
    ($context: literal) => {{
        if cfg!(debug_assertions) {
            $crate::gl_error::check_for_gl_error_impl(file!(), line!(), $context)
        }
    }};
}

/// Check for OpenGL error and report it using `log::error!`.
///
/// WARNING: slow! Only use during setup!
///
/// ``` no_run
/// use sdl2_gl_shader::check_for_gl_error_even_in_release;
/// check_for_gl_error_even_in_release!();
/// check_for_gl_error_even_in_release!("after linking");
/// ```
#[macro_export]
macro_rules! check_for_gl_error_even_in_release {
    () => {{
        $crate::gl_error::check_for_gl_error_impl(file!(), line!(), "")
    }};
    ($context: literal) => {{
        $crate::gl_error::check_for_gl_error_impl(file!(), line!(), $context)
    }};
}

#[doc(hidden)]
pub fn check_for_gl_error_impl(file: &str, line: u32, context: &str) {
    #[allow(unsafe_code)]
    let error_code = unsafe { gl::GetError() };
    if error_code != gl::NO_ERROR {
        let error_str = gl_error_name(error_code);

        if context.is_empty() {
            log::error!(
                "GL error, at {}:{}: {} (0x{:X})",
                file,
                line,
                error_str,
                error_code,
            );
        } else {
            log::error!(
                "GL error, at {}:{} ({}): {} (0x{:X})",
                file,
                line,
                context,
                error_str,
                error_code,
            );
        }
    }
}

fn gl_error_name(error_code: gl::types::GLenum) -> &'static str {
    match error_code {
        gl::INVALID_ENUM => "GL_INVALID_ENUM",
        gl::INVALID_VALUE => "GL_INVALID_VALUE",
        gl::INVALID_OPERATION => "GL_INVALID_OPERATION",
        gl::STACK_OVERFLOW => "GL_STACK_OVERFLOW",
        gl::STACK_UNDERFLOW => "GL_STACK_UNDERFLOW",
        gl::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        gl::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        gl::CONTEXT_LOST => "GL_CONTEXT_LOST",
        _ => "<unknown>",
    }
}
