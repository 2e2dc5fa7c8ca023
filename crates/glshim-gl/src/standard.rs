//! OpenGL 1.1 to 2.1 entry points from the `gl` crate table.
//!
//! Only entry points that survive in the core profile are listed, since that
//! is what the `gl` crate generates. Fixed-function entry points live in
//! [`compat`](crate::compat).

use std::ffi::c_void;

use gl::types::*;
use glshim_core::GlBool;

gl_stubs! {
    // State
    enable => Enable(cap: GLenum);
    disable => Disable(cap: GLenum);
    is_enabled => IsEnabled(cap: GLenum) -> GlBool;
    hint => Hint(target: GLenum, mode: GLenum);
    get_error => GetError() -> GLenum;
    get_string => GetString(name: GLenum) -> *const GLubyte;
    get_integerv => GetIntegerv(pname: GLenum, data: *mut GLint);
    get_floatv => GetFloatv(pname: GLenum, data: *mut GLfloat);
    flush => Flush();
    finish => Finish();
    pixel_storei => PixelStorei(pname: GLenum, param: GLint);

    // Framebuffer and rasterisation
    clear => Clear(mask: GLbitfield);
    clear_color => ClearColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    clear_depth => ClearDepth(depth: GLdouble);
    clear_stencil => ClearStencil(s: GLint);
    color_mask => ColorMask(red: GlBool, green: GlBool, blue: GlBool, alpha: GlBool);
    depth_func => DepthFunc(func: GLenum);
    depth_mask => DepthMask(flag: GlBool);
    depth_range => DepthRange(near: GLdouble, far: GLdouble);
    cull_face => CullFace(mode: GLenum);
    front_face => FrontFace(mode: GLenum);
    line_width => LineWidth(width: GLfloat);
    point_size => PointSize(size: GLfloat);
    polygon_mode => PolygonMode(face: GLenum, mode: GLenum);
    polygon_offset => PolygonOffset(factor: GLfloat, units: GLfloat);
    viewport => Viewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    scissor => Scissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    read_pixels => ReadPixels(
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        kind: GLenum,
        pixels: *mut c_void,
    );
    draw_buffers => DrawBuffers(n: GLsizei, bufs: *const GLenum);
    blit_framebuffer => BlitFramebuffer(
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

    // Blending and stencil
    blend_func => BlendFunc(sfactor: GLenum, dfactor: GLenum);
    blend_func_separate => BlendFuncSeparate(
        src_rgb: GLenum,
        dst_rgb: GLenum,
        src_alpha: GLenum,
        dst_alpha: GLenum,
    );
    blend_equation => BlendEquation(mode: GLenum);
    blend_equation_separate => BlendEquationSeparate(mode_rgb: GLenum, mode_alpha: GLenum);
    blend_color => BlendColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    stencil_func => StencilFunc(func: GLenum, reference: GLint, mask: GLuint);
    stencil_op => StencilOp(fail: GLenum, zfail: GLenum, zpass: GLenum);
    stencil_op_separate => StencilOpSeparate(
        face: GLenum,
        sfail: GLenum,
        dpfail: GLenum,
        dppass: GLenum,
    );
    stencil_mask => StencilMask(mask: GLuint);

    // Textures
    gen_textures => GenTextures(n: GLsizei, textures: *mut GLuint);
    delete_textures => DeleteTextures(n: GLsizei, textures: *const GLuint);
    bind_texture => BindTexture(target: GLenum, texture: GLuint);
    is_texture => IsTexture(texture: GLuint) -> GlBool;
    active_texture => ActiveTexture(texture: GLenum);
    tex_parameteri => TexParameteri(target: GLenum, pname: GLenum, param: GLint);
    tex_parameterf => TexParameterf(target: GLenum, pname: GLenum, param: GLfloat);
    tex_image_2d => TexImage2D(
        target: GLenum,
        level: GLint,
        internal_format: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        format: GLenum,
        kind: GLenum,
        pixels: *const c_void,
    );
    tex_sub_image_2d => TexSubImage2D(
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        kind: GLenum,
        pixels: *const c_void,
    );
    copy_tex_image_2d => CopyTexImage2D(
        target: GLenum,
        level: GLint,
        internal_format: GLenum,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
    );

    // Buffers and queries (1.5)
    gen_buffers => GenBuffers(n: GLsizei, buffers: *mut GLuint);
    delete_buffers => DeleteBuffers(n: GLsizei, buffers: *const GLuint);
    bind_buffer => BindBuffer(target: GLenum, buffer: GLuint);
    is_buffer => IsBuffer(buffer: GLuint) -> GlBool;
    buffer_data => BufferData(target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum);
    buffer_sub_data => BufferSubData(
        target: GLenum,
        offset: GLintptr,
        size: GLsizeiptr,
        data: *const c_void,
    );
    gen_queries => GenQueries(n: GLsizei, ids: *mut GLuint);
    begin_query => BeginQuery(target: GLenum, id: GLuint);
    end_query => EndQuery(target: GLenum);

    // Shaders and programs (2.0, 2.1)
    create_shader => CreateShader(kind: GLenum) -> GLuint;
    delete_shader => DeleteShader(shader: GLuint);
    shader_source => ShaderSource(
        shader: GLuint,
        count: GLsizei,
        string: *const *const GLchar,
        length: *const GLint,
    );
    compile_shader => CompileShader(shader: GLuint);
    get_shaderiv => GetShaderiv(shader: GLuint, pname: GLenum, params: *mut GLint);
    create_program => CreateProgram() -> GLuint;
    delete_program => DeleteProgram(program: GLuint);
    attach_shader => AttachShader(program: GLuint, shader: GLuint);
    link_program => LinkProgram(program: GLuint);
    use_program => UseProgram(program: GLuint);
    get_programiv => GetProgramiv(program: GLuint, pname: GLenum, params: *mut GLint);
    get_uniform_location => GetUniformLocation(program: GLuint, name: *const GLchar) -> GLint;
    get_attrib_location => GetAttribLocation(program: GLuint, name: *const GLchar) -> GLint;
    bind_attrib_location => BindAttribLocation(program: GLuint, index: GLuint, name: *const GLchar);
    uniform_1i => Uniform1i(location: GLint, v0: GLint);
    uniform_1f => Uniform1f(location: GLint, v0: GLfloat);
    uniform_4f => Uniform4f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat);
    uniform_matrix_4fv => UniformMatrix4fv(
        location: GLint,
        count: GLsizei,
        transpose: GlBool,
        value: *const GLfloat,
    );
    uniform_matrix_2x3fv => UniformMatrix2x3fv(
        location: GLint,
        count: GLsizei,
        transpose: GlBool,
        value: *const GLfloat,
    );
    vertex_attrib_pointer => VertexAttribPointer(
        index: GLuint,
        size: GLint,
        kind: GLenum,
        normalized: GlBool,
        stride: GLsizei,
        pointer: *const c_void,
    );
    enable_vertex_attrib_array => EnableVertexAttribArray(index: GLuint);
    disable_vertex_attrib_array => DisableVertexAttribArray(index: GLuint);

    // Drawing
    draw_arrays => DrawArrays(mode: GLenum, first: GLint, count: GLsizei);
    draw_elements => DrawElements(mode: GLenum, count: GLsizei, kind: GLenum, indices: *const c_void);
}
