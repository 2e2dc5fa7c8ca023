//! Vendor extension entry points, resolved on first call.

use std::ffi::c_void;

use gl::types::*;
use glshim_core::GlBool;

ext_stubs! {
    // GL_EXT_framebuffer_object
    gen_framebuffers_ext => glGenFramebuffersEXT(n: GLsizei, framebuffers: *mut GLuint);
    delete_framebuffers_ext => glDeleteFramebuffersEXT(n: GLsizei, framebuffers: *const GLuint);
    bind_framebuffer_ext => glBindFramebufferEXT(target: GLenum, framebuffer: GLuint);
    is_framebuffer_ext => glIsFramebufferEXT(framebuffer: GLuint) -> GlBool;
    check_framebuffer_status_ext => glCheckFramebufferStatusEXT(target: GLenum) -> GLenum;
    framebuffer_texture_2d_ext => glFramebufferTexture2DEXT(
        target: GLenum,
        attachment: GLenum,
        textarget: GLenum,
        texture: GLuint,
        level: GLint,
    );
    gen_renderbuffers_ext => glGenRenderbuffersEXT(n: GLsizei, renderbuffers: *mut GLuint);
    delete_renderbuffers_ext => glDeleteRenderbuffersEXT(n: GLsizei, renderbuffers: *const GLuint);
    bind_renderbuffer_ext => glBindRenderbufferEXT(target: GLenum, renderbuffer: GLuint);
    renderbuffer_storage_ext => glRenderbufferStorageEXT(
        target: GLenum,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
    );
    framebuffer_renderbuffer_ext => glFramebufferRenderbufferEXT(
        target: GLenum,
        attachment: GLenum,
        renderbuffer_target: GLenum,
        renderbuffer: GLuint,
    );
    generate_mipmap_ext => glGenerateMipmapEXT(target: GLenum);

    // GL_EXT_framebuffer_blit
    blit_framebuffer_ext => glBlitFramebufferEXT(
        src_x0: GLint,
        src_y0: GLint,
        src_x1: GLint,
        src_y1: GLint,
        dst_x0: GLint,
        dst_y0: GLint,
        dst_x1: GLint,
        dst_y1: GLint,
        mask: GLbitfield,
        filter: GLenum,
    );

    // GL_ARB_multitexture
    active_texture_arb => glActiveTextureARB(texture: GLenum);
    client_active_texture_arb => glClientActiveTextureARB(texture: GLenum);
    multi_tex_coord_2f_arb => glMultiTexCoord2fARB(target: GLenum, s: GLfloat, t: GLfloat);

    // GL_ARB_window_pos
    window_pos_2i_arb => glWindowPos2iARB(x: GLint, y: GLint);
    window_pos_3f_arb => glWindowPos3fARB(x: GLfloat, y: GLfloat, z: GLfloat);

    // GL_ARB_point_parameters
    point_parameter_f_arb => glPointParameterfARB(pname: GLenum, param: GLfloat);

    // GL_EXT_blend_equation_separate
    blend_equation_separate_ext => glBlendEquationSeparateEXT(mode_rgb: GLenum, mode_alpha: GLenum);

    // GL_ARB_vertex_buffer_object
    gen_buffers_arb => glGenBuffersARB(n: GLsizei, buffers: *mut GLuint);
    bind_buffer_arb => glBindBufferARB(target: GLenum, buffer: GLuint);
    buffer_data_arb => glBufferDataARB(
        target: GLenum,
        size: GLsizeiptr,
        data: *const c_void,
        usage: GLenum,
    );
}
