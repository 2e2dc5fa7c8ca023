//! Fixed-function OpenGL 1.1 to 2.1 entry points.
//!
//! The `gl` crate only carries the core profile, so these resolve by name on
//! first call like extensions do.

use std::ffi::c_void;

use gl::types::*;

ext_stubs! {
    // Immediate mode
    begin => glBegin(mode: GLenum);
    end => glEnd();
    vertex_2f => glVertex2f(x: GLfloat, y: GLfloat);
    vertex_2i => glVertex2i(x: GLint, y: GLint);
    vertex_3f => glVertex3f(x: GLfloat, y: GLfloat, z: GLfloat);
    vertex_3d => glVertex3d(x: GLdouble, y: GLdouble, z: GLdouble);
    color_3f => glColor3f(red: GLfloat, green: GLfloat, blue: GLfloat);
    color_4f => glColor4f(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    color_3ub => glColor3ub(red: GLubyte, green: GLubyte, blue: GLubyte);
    color_4ub => glColor4ub(red: GLubyte, green: GLubyte, blue: GLubyte, alpha: GLubyte);
    normal_3f => glNormal3f(nx: GLfloat, ny: GLfloat, nz: GLfloat);
    tex_coord_2f => glTexCoord2f(s: GLfloat, t: GLfloat);
    raster_pos_2i => glRasterPos2i(x: GLint, y: GLint);
    rect_f => glRectf(x1: GLfloat, y1: GLfloat, x2: GLfloat, y2: GLfloat);

    // Matrix stack
    matrix_mode => glMatrixMode(mode: GLenum);
    load_identity => glLoadIdentity();
    push_matrix => glPushMatrix();
    pop_matrix => glPopMatrix();
    load_matrix_f => glLoadMatrixf(m: *const GLfloat);
    mult_matrix_f => glMultMatrixf(m: *const GLfloat);
    translate_f => glTranslatef(x: GLfloat, y: GLfloat, z: GLfloat);
    rotate_f => glRotatef(angle: GLfloat, x: GLfloat, y: GLfloat, z: GLfloat);
    scale_f => glScalef(x: GLfloat, y: GLfloat, z: GLfloat);
    ortho => glOrtho(
        left: GLdouble,
        right: GLdouble,
        bottom: GLdouble,
        top: GLdouble,
        near: GLdouble,
        far: GLdouble,
    );
    frustum => glFrustum(
        left: GLdouble,
        right: GLdouble,
        bottom: GLdouble,
        top: GLdouble,
        near: GLdouble,
        far: GLdouble,
    );

    // Lighting, materials and fog
    shade_model => glShadeModel(mode: GLenum);
    light_f => glLightf(light: GLenum, pname: GLenum, param: GLfloat);
    light_fv => glLightfv(light: GLenum, pname: GLenum, params: *const GLfloat);
    light_model_fv => glLightModelfv(pname: GLenum, params: *const GLfloat);
    material_f => glMaterialf(face: GLenum, pname: GLenum, param: GLfloat);
    material_fv => glMaterialfv(face: GLenum, pname: GLenum, params: *const GLfloat);
    color_material => glColorMaterial(face: GLenum, mode: GLenum);
    fog_f => glFogf(pname: GLenum, param: GLfloat);
    fog_i => glFogi(pname: GLenum, param: GLint);
    fog_fv => glFogfv(pname: GLenum, params: *const GLfloat);
    alpha_func => glAlphaFunc(func: GLenum, reference: GLfloat);

    // Texture environment
    tex_env_i => glTexEnvi(target: GLenum, pname: GLenum, param: GLint);
    tex_env_f => glTexEnvf(target: GLenum, pname: GLenum, param: GLfloat);
    tex_env_fv => glTexEnvfv(target: GLenum, pname: GLenum, params: *const GLfloat);

    // Client-side vertex arrays
    enable_client_state => glEnableClientState(array: GLenum);
    disable_client_state => glDisableClientState(array: GLenum);
    vertex_pointer => glVertexPointer(size: GLint, kind: GLenum, stride: GLsizei, pointer: *const c_void);
    color_pointer => glColorPointer(size: GLint, kind: GLenum, stride: GLsizei, pointer: *const c_void);
    tex_coord_pointer => glTexCoordPointer(
        size: GLint,
        kind: GLenum,
        stride: GLsizei,
        pointer: *const c_void,
    );
    normal_pointer => glNormalPointer(kind: GLenum, stride: GLsizei, pointer: *const c_void);

    // Display lists and attribute stack
    gen_lists => glGenLists(range: GLsizei) -> GLuint;
    delete_lists => glDeleteLists(list: GLuint, range: GLsizei);
    new_list => glNewList(list: GLuint, mode: GLenum);
    end_list => glEndList();
    call_list => glCallList(list: GLuint);
    push_attrib => glPushAttrib(mask: GLbitfield);
    pop_attrib => glPopAttrib();
}
